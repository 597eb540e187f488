// src/report/classify.rs
// =============================================================================
// Sorts each result into exactly one bucket.
//
// Precedence (first match wins):
//   1. error          -> Error        (transport error, loop, too many hops...)
//   2. home page      -> HomeRedirect (some chain step is a generic landing page)
//   3. status >= 400  -> HttpError
//   4. redirected     -> Redirect     (working redirect, worth updating)
//   5. status == 200  -> Success
//   6. anything else  -> Other        (204, 304...)
// =============================================================================

use crate::checker::RedirectChainResult;

/// The bucket a result falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Error,
    HomeRedirect,
    HttpError(u16),
    Redirect,
    Success,
    Other(Option<u16>),
}

impl Outcome {
    /// True for the buckets that make the run fail.
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Error | Outcome::HomeRedirect | Outcome::HttpError(_))
    }
}

/// Classifies one result.
///
/// Any step matching a home page fails the url, including a sitemap entry
/// that is itself a landing page.
pub fn classify(result: &RedirectChainResult) -> Outcome {
    if result.error.is_some() {
        return Outcome::Error;
    }
    if result.leads_to_home() {
        return Outcome::HomeRedirect;
    }
    match result.status_code {
        Some(code) if code >= 400 => Outcome::HttpError(code),
        _ if result.redirected() => Outcome::Redirect,
        Some(200) => Outcome::Success,
        other => Outcome::Other(other),
    }
}
