// src/error.rs
// =============================================================================
// Error types for the library.
//
// There are three families of errors:
// - SitemapError: the sitemap could not be read (fatal to the run)
// - RedirectError: something went wrong while resolving ONE url
//   (recorded in that url's result, never aborts the run)
// - OutputError: the report output could not be opened or written
//
// We use `thiserror` to derive Display/Error for each enum. The binary
// (main.rs) wraps these in anyhow::Error when it needs to add context.
// =============================================================================

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading the sitemap file.
#[derive(Error, Debug)]
pub enum SitemapError {
    /// The sitemap path does not exist.
    #[error("Sitemap file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The document is not well-formed XML.
    #[error("Error parsing XML sitemap: {0}")]
    Parse(String),

    /// Any other I/O failure while opening or reading the file.
    #[error("Error reading sitemap: {0}")]
    Io(#[from] io::Error),
}

/// Terminal error of a single redirect chain resolution.
///
/// The resolver never returns these as `Err`; they are stored in
/// `RedirectChainResult::error` so every url is reported the same way.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RedirectError {
    /// Connection error, timeout, malformed response...
    #[error("{0}")]
    Transport(String),

    /// A 3xx response without a usable Location header.
    #[error("Redirect missing destination (HTTP {status} without Location header)")]
    MissingLocation { status: u16 },

    /// The url listed in the sitemap is not an absolute http(s) url.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The Location header could not be turned into an absolute url.
    #[error("Invalid redirect location: {0}")]
    InvalidLocation(String),

    /// The chain came back to a url it had already visited.
    #[error("Redirect loop detected at {0}")]
    Loop(String),

    /// The hop limit was reached before the chain settled.
    #[error("Too many redirects (limit {0})")]
    TooManyRedirects(usize),
}

/// Errors raised by the report output writer.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Could not open output file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error writing report output: {0}")]
    Write(#[from] io::Error),

    /// The writer task is gone (it failed earlier or was already closed).
    #[error("Report output writer has shut down")]
    Closed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_error_messages() {
        let err = RedirectError::MissingLocation { status: 302 };
        assert!(err.to_string().contains("Redirect missing destination"));

        let err = RedirectError::InvalidUrl("relative URL without a base".to_string());
        assert_eq!(err.to_string(), "Invalid URL: relative URL without a base");

        let err = RedirectError::TooManyRedirects(10);
        assert_eq!(err.to_string(), "Too many redirects (limit 10)");

        // Transport errors show the underlying message as-is
        let err = RedirectError::Transport("operation timed out".to_string());
        assert_eq!(err.to_string(), "operation timed out");
    }

    #[test]
    fn test_sitemap_not_found_message() {
        let err = SitemapError::NotFound(PathBuf::from("fern/docs.xml"));
        assert_eq!(err.to_string(), "Sitemap file not found: fern/docs.xml");
    }
}
