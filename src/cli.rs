// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use clap's "derive" API: the struct below IS the CLI. Each field is a
// flag, its doc comment is the help text, and #[arg(...)] sets the flag
// name, default value and validation.
//
// There are no subcommands - the tool does one thing:
//   sitemap-guardian --sitemap fern/docs.xml --workers 20 --max-urls 100
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

use clap::builder::RangedU64ValueParser;
use clap::Parser;
use log::LevelFilter;

use crate::checker::HomePages;
use crate::config::constants::*;
use crate::config::CheckerConfig;

#[derive(Parser, Debug)]
#[command(
    name = "sitemap-guardian",
    version,
    about = "Check every URL in a sitemap for errors and unwanted redirects",
    long_about = "sitemap-guardian reads a sitemap, requests every listed URL, follows redirect \
                  chains hop by hop, and reports errors, 4xx/5xx responses, and redirects that \
                  fall back to a generic home page. Exits with 1 if any issue is found."
)]
pub struct Cli {
    /// Path to the sitemap XML file
    #[arg(long, default_value = DEFAULT_SITEMAP_PATH)]
    pub sitemap: PathBuf,

    /// Number of URLs checked concurrently
    #[arg(long, default_value_t = DEFAULT_WORKERS, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub workers: usize,

    /// Delay between request starts (seconds)
    #[arg(long, default_value_t = DEFAULT_DELAY_SECS, value_parser = parse_delay)]
    pub delay: f64,

    /// Request timeout for each hop (seconds)
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Maximum number of redirects followed per URL
    #[arg(long, default_value_t = DEFAULT_MAX_REDIRECTS, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub max_redirects: usize,

    /// Only check the first N URLs (for testing)
    #[arg(long)]
    pub max_urls: Option<usize>,

    /// File the report is written to (in addition to stdout)
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Home page URL; redirects ending here count as failures (repeatable)
    ///
    /// Defaults to the Fern documentation landing pages.
    #[arg(long = "home-url", value_name = "URL")]
    pub home_urls: Vec<String>,

    /// User-Agent header sent with every request
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Diagnostic log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value_t = LevelFilter::Warn)]
    pub log_level: LevelFilter,
}

impl Cli {
    /// Builds the run configuration from the parsed flags.
    pub fn to_config(&self) -> CheckerConfig {
        let home_pages = if self.home_urls.is_empty() {
            HomePages::new(DEFAULT_HOME_URLS.iter().copied())
        } else {
            HomePages::new(&self.home_urls)
        };

        CheckerConfig {
            workers: self.workers,
            delay: Duration::from_secs_f64(self.delay),
            timeout: Duration::from_secs(self.timeout),
            max_redirects: self.max_redirects,
            home_pages,
            user_agent: self.user_agent.clone(),
        }
    }
}

// Accepts any finite, non-negative number of seconds.
fn parse_delay(value: &str) -> Result<f64, String> {
    let delay: f64 = value
        .parse()
        .map_err(|_| format!("'{}' is not a number of seconds", value))?;
    if !delay.is_finite() || delay < 0.0 {
        return Err(format!("delay must be a non-negative number, got {}", value));
    }
    Ok(delay)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["sitemap-guardian"]).unwrap();
        assert_eq!(cli.sitemap, PathBuf::from("fern/docs.xml"));
        assert_eq!(cli.workers, 10);
        assert_eq!(cli.delay, 0.1);
        assert_eq!(cli.timeout, 30);
        assert_eq!(cli.max_redirects, 10);
        assert_eq!(cli.max_urls, None);
        assert_eq!(cli.output, PathBuf::from("url_check_results.txt"));
        assert_eq!(cli.log_level, LevelFilter::Warn);

        let config = cli.to_config();
        assert_eq!(config.home_pages.len(), DEFAULT_HOME_URLS.len());
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "sitemap-guardian",
            "--sitemap",
            "site.xml",
            "--workers",
            "4",
            "--delay",
            "0",
            "--timeout",
            "5",
            "--max-redirects",
            "3",
            "--max-urls",
            "20",
            "--output",
            "out.txt",
            "--home-url",
            "https://example.com/",
            "--home-url",
            "https://example.com/home",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(cli.max_urls, Some(20));
        assert_eq!(cli.log_level, LevelFilter::Debug);

        let config = cli.to_config();
        assert_eq!(config.workers, 4);
        assert_eq!(config.delay, Duration::ZERO);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.max_redirects, 3);
        assert_eq!(config.home_pages.len(), 2);
        assert!(config.home_pages.contains("https://example.com"));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(Cli::try_parse_from(["sitemap-guardian", "--workers", "0"]).is_err());
        assert!(Cli::try_parse_from(["sitemap-guardian", "--delay", "-1"]).is_err());
        assert!(Cli::try_parse_from(["sitemap-guardian", "--delay", "soon"]).is_err());
        assert!(Cli::try_parse_from(["sitemap-guardian", "--max-redirects", "0"]).is_err());
        // No subcommands or positional arguments
        assert!(Cli::try_parse_from(["sitemap-guardian", "check"]).is_err());
    }
}
