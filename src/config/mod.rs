// src/config/mod.rs
// =============================================================================
// Run configuration.
//
// CheckerConfig is built once (from the CLI in main.rs, or by hand in tests)
// and then shared read-only by every concurrent resolution behind an Arc.
// Nothing in here changes after the run starts.
// =============================================================================

pub mod constants;

use std::time::Duration;

use crate::checker::HomePages;
use constants::*;

/// Immutable settings for one checking run.
#[derive(Debug, Clone)]
pub struct CheckerConfig {
    /// How many urls are resolved concurrently (at least 1)
    pub workers: usize,
    /// Minimum spacing between two request starts
    pub delay: Duration,
    /// Timeout for each individual HTTP request (one hop)
    pub timeout: Duration,
    /// Maximum number of redirect hops followed per url
    pub max_redirects: usize,
    /// Landing pages that count as "content lost" when redirected to
    pub home_pages: HomePages,
    pub user_agent: String,
}

impl CheckerConfig {
    /// Replaces the home page set, keeping every other setting.
    pub fn with_home_pages(mut self, home_pages: HomePages) -> Self {
        self.home_pages = home_pages;
        self
    }

    /// Human-readable one-liner used in the report banner.
    pub fn describe(&self) -> String {
        format!(
            "Using {} workers with {}s delay, {}s timeout, max {} redirects",
            self.workers,
            self.delay.as_secs_f64(),
            self.timeout.as_secs(),
            self.max_redirects
        )
    }
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            delay: Duration::from_secs_f64(DEFAULT_DELAY_SECS),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_redirects: DEFAULT_MAX_REDIRECTS,
            home_pages: HomePages::new(DEFAULT_HOME_URLS.iter().copied()),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
