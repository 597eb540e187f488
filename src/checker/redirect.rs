// src/checker/redirect.rs
// =============================================================================
// Redirect chain resolution.
//
// Instead of letting reqwest follow redirects automatically, we walk the
// chain one hop at a time:
//
//   GET A  -> 301 Location: /b   -> chain = [A, B]
//   GET B  -> 302 Location: C    -> chain = [A, B, C]
//   GET C  -> 200                -> done, C is the final url
//
// This lets us see every intermediate url, detect loops, stop as soon as a
// chain reaches a generic home page, and cap the number of hops.
//
// The resolver NEVER fails: every problem (unusable url, timeout, missing
// Location, loop, too many hops) ends up in the `error` field of the result. The dispatcher
// can then treat every url the same way.
// =============================================================================

use log::debug;
use reqwest::header::LOCATION;
use reqwest::Client;
use url::Url;

use super::http::describe_transport_error;
use crate::config::constants::REDIRECT_STATUS_CODES;
use crate::config::CheckerConfig;
use crate::error::RedirectError;

/// Everything we learned while resolving one url.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectChainResult {
    /// The url as listed in the sitemap
    pub url: String,
    /// Every url visited, starting with `url`. Never empty.
    pub chain: Vec<String>,
    /// Status of the last response received (None if no response ever came back)
    pub status_code: Option<u16>,
    /// Why resolution stopped early, if it did
    pub error: Option<RedirectError>,
    /// Index in `chain` of the step that matched a home page
    pub home_at_step: Option<usize>,
}

impl RedirectChainResult {
    fn start(url: &str) -> Self {
        Self {
            url: url.to_string(),
            chain: vec![url.to_string()],
            status_code: None,
            error: None,
            home_at_step: None,
        }
    }

    /// The last url in the chain.
    pub fn final_url(&self) -> &str {
        // The chain always holds at least the original url
        self.chain.last().map(String::as_str).unwrap_or(&self.url)
    }

    /// True if at least one redirect hop was followed.
    pub fn redirected(&self) -> bool {
        self.chain.len() > 1
    }

    pub fn redirect_count(&self) -> usize {
        self.chain.len().saturating_sub(1)
    }

    /// True if some step of the chain is a configured home page.
    pub fn leads_to_home(&self) -> bool {
        self.home_at_step.is_some()
    }

    /// The chain rendered as "A → B → C".
    pub fn chain_display(&self) -> String {
        self.chain.join(" → ")
    }

    // Records a home match for the last url of the chain, if it is one.
    fn check_home(&mut self, config: &CheckerConfig) {
        if config.home_pages.contains(self.final_url()) {
            self.home_at_step = Some(self.chain.len() - 1);
        }
    }

    fn fail(mut self, error: RedirectError, config: &CheckerConfig) -> Self {
        self.error = Some(error);
        self.check_home(config);
        self
    }
}

/// Resolves `url` hop by hop, up to `config.max_redirects` redirects.
///
/// The client must have automatic redirects disabled (see `build_client`).
pub async fn resolve_redirect_chain(
    client: &Client,
    url: &str,
    config: &CheckerConfig,
) -> RedirectChainResult {
    let mut result = RedirectChainResult::start(url);

    // Sitemap entries are kept as written, so they may not be usable urls
    if let Err(reason) = Url::parse(url) {
        return result.fail(RedirectError::InvalidUrl(reason.to_string()), config);
    }

    let mut current = url.to_string();
    let mut hops = 0;

    while hops < config.max_redirects {
        debug!("GET {} (hop {})", current, hops);

        let response = match client.get(&current).timeout(config.timeout).send().await {
            Ok(response) => response,
            Err(e) => {
                let message = describe_transport_error(&e);
                return result.fail(RedirectError::Transport(message), config);
            }
        };

        let status = response.status().as_u16();
        result.status_code = Some(status);

        if !is_redirect_status(status) {
            // Not a redirect: the current url is the final one
            result.check_home(config);
            return result;
        }

        // A redirect without a readable Location header is a dead end
        let location = match response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
        {
            Some(location) if !location.trim().is_empty() => location.trim().to_string(),
            _ => {
                return result.fail(RedirectError::MissingLocation { status }, config);
            }
        };

        let next = match resolve_location(&current, &location) {
            Some(next) => next,
            None => return result.fail(RedirectError::InvalidLocation(location), config),
        };
        debug!("{} -> {} ({})", current, next, status);

        let seen_before = result.chain.contains(&next);
        result.chain.push(next.clone());

        if seen_before {
            result.error = Some(RedirectError::Loop(next));
            return result;
        }

        if config.home_pages.contains(&next) {
            result.home_at_step = Some(result.chain.len() - 1);
            return result;
        }

        current = next;
        hops += 1;
    }

    result.fail(RedirectError::TooManyRedirects(config.max_redirects), config)
}

/// 301, 302, 303, 307 and 308. Other 3xx codes (304, 300...) are final.
pub fn is_redirect_status(status: u16) -> bool {
    REDIRECT_STATUS_CODES.contains(&status)
}

/// Turns a Location header into an absolute url.
///
/// Handles absolute urls, absolute paths ("/docs") and relative references
/// ("docs", "../docs", "//other.host/docs") by joining against the url that
/// returned the redirect.
pub fn resolve_location(current: &str, location: &str) -> Option<String> {
    if let Ok(absolute) = Url::parse(location) {
        return Some(absolute.to_string());
    }

    let base = Url::parse(current).ok()?;
    base.join(location).ok().map(|url| url.to_string())
}
