// src/lib.rs
// =============================================================================
// sitemap-guardian: checks every url of a sitemap for errors, 4xx/5xx
// responses and redirects that fall back to a generic home page.
//
// Data flow:
//   sitemap  ->  urls  ->  checker::dispatch (resolver per url)
//            ->  results  ->  report (stdout + output file)  ->  exit code
//
// The binary (src/main.rs) only parses arguments and calls app::run.
// =============================================================================

pub mod app;
pub mod checker;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod sitemap;

pub use app::run;
pub use checker::{dispatch, resolve_redirect_chain, HomePages, RedirectChainResult};
pub use cli::Cli;
pub use config::CheckerConfig;
pub use error::{OutputError, RedirectError, SitemapError};
pub use report::{classify, Outcome, Summary};
