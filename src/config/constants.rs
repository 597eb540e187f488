// src/config/constants.rs
// =============================================================================
// Default values for every tunable setting.
//
// The CLI (src/cli.rs) uses these as its defaults, and tests use them to
// build configurations without going through argument parsing.
// =============================================================================

/// Where the sitemap lives when --sitemap is not given
pub const DEFAULT_SITEMAP_PATH: &str = "fern/docs.xml";

/// Where the report is written when --output is not given
pub const DEFAULT_OUTPUT_PATH: &str = "url_check_results.txt";

/// Number of urls resolved at the same time
pub const DEFAULT_WORKERS: usize = 10;

/// Seconds between two request starts
pub const DEFAULT_DELAY_SECS: f64 = 0.1;

/// Per-request timeout in seconds (applies to every hop separately)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum number of redirect hops followed for one url
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

pub const DEFAULT_USER_AGENT: &str = "Fern-URL-Checker/1.0";

/// Generic landing pages. A redirect ending on one of these means the
/// original page's content is gone.
pub const DEFAULT_HOME_URLS: &[&str] = &[
    "https://buildwithfern.com",
    "https://buildwithfern.com/learn",
    "https://buildwithfern.com/learn/home",
    "https://buildwithfern.com/learn/v2/home",
];

/// A progress line is printed every this many results
pub const PROGRESS_INTERVAL: usize = 50;

/// Status codes treated as redirects by the resolver
pub const REDIRECT_STATUS_CODES: [u16; 5] = [301, 302, 303, 307, 308];
