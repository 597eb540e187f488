// src/app.rs
// =============================================================================
// One complete checking run, from parsed CLI flags to exit code.
//
// What happens here:
// 1. Open the output file (fatal if it cannot be created)
// 2. Read the sitemap (no urls = fatal)
// 3. Optionally keep only the first --max-urls urls
// 4. Resolve every url concurrently, reporting each result as it arrives
// 5. Print the summary and turn it into an exit code
//
// Exit codes:
//   0 = every url resolved cleanly
//   1 = at least one issue, empty sitemap, or unusable output file
// =============================================================================

use std::sync::Arc;

use anyhow::{Context, Result};
use log::{error, info};

use crate::checker;
use crate::cli::Cli;
use crate::report::{OutputWriter, Reporter};
use crate::sitemap;

/// Runs the checker described by `cli` and returns the process exit code.
///
/// `Err` is only returned for unexpected failures (HTTP client could not be
/// built, report output broke mid-run); every expected problem is an exit
/// code.
pub async fn run(cli: Cli) -> Result<i32> {
    let config = Arc::new(cli.to_config());

    let out = match OutputWriter::create(&cli.output, true) {
        Ok(out) => out,
        Err(e) => {
            error!("{}", e);
            return Ok(1);
        }
    };
    let reporter = Reporter::new(out);
    reporter.banner()?;

    let mut urls = sitemap::load_urls(&cli.sitemap);
    if urls.is_empty() {
        reporter.line("❌ No URLs found in sitemap")?;
        reporter.close().await?;
        return Ok(1);
    }
    info!("Loaded {} urls from {}", urls.len(), cli.sitemap.display());

    // --max-urls 0 means "no limit", like leaving the flag out
    if let Some(max_urls) = cli.max_urls.filter(|&n| n > 0) {
        urls.truncate(max_urls);
        reporter.line(format!("🔬 Testing mode: checking first {} URLs", urls.len()))?;
    }

    let total = urls.len();
    reporter.start(total, &config)?;

    // The callback cannot return errors, so keep the first one for later
    let mut write_error = None;
    let results = checker::dispatch(urls, Arc::clone(&config), |index, result| {
        if let Err(e) = reporter.record(index, total, result) {
            write_error.get_or_insert(e);
        }
    })
    .await
    .context("Failed to create HTTP client")?;

    if let Some(e) = write_error {
        return Err(e).context("Failed to write report");
    }

    let summary = reporter.finish(&results).await?;
    info!(
        "Checked {} urls: {} failed, {} home page redirects",
        summary.total, summary.failed, summary.home_redirects
    );

    Ok(summary.exit_code())
}
