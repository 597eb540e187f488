// src/report/mod.rs
// =============================================================================
// This module turns results into the human-readable report.
//
// Submodules:
// - classify: puts each result in exactly one bucket
// - summary: counts buckets and renders the end-of-run listings
// - writer: the single task that owns stdout and the output file
//
// The Reporter ties them together: it writes the banner, one running line
// per result as results arrive, progress lines, and the final summary.
// =============================================================================

mod classify;
mod summary;
mod writer;

pub use classify::{classify, Outcome};
pub use summary::{render_summary, Summary};
pub use writer::OutputWriter;

use crate::checker::RedirectChainResult;
use crate::config::constants::PROGRESS_INTERVAL;
use crate::config::CheckerConfig;
use crate::error::OutputError;

/// Writes the report for one run through an OutputWriter.
pub struct Reporter {
    out: OutputWriter,
}

impl Reporter {
    pub fn new(out: OutputWriter) -> Self {
        Self { out }
    }

    /// Writes one line of free text (banner, notices...).
    pub fn line(&self, line: impl Into<String>) -> Result<(), OutputError> {
        self.out.line(line)
    }

    pub fn banner(&self) -> Result<(), OutputError> {
        self.line("🚀 Sitemap URL Checker")?;
        self.line("=".repeat(60))
    }

    /// Announces the checks about to run.
    pub fn start(&self, url_count: usize, config: &CheckerConfig) -> Result<(), OutputError> {
        self.line(format!("🔍 Checking {} URLs...", url_count))?;
        self.line(format!("⚙️  {}", config.describe()))?;
        self.line(format!(
            "🏠 Watching for redirects to {} home page URL(s)",
            config.home_pages.len()
        ))?;
        self.line("=".repeat(60))
    }

    /// Writes the running line for the `index`-th result (1-based), plus a
    /// progress line every PROGRESS_INTERVAL results and after the last one.
    pub fn record(
        &self,
        index: usize,
        total: usize,
        result: &RedirectChainResult,
    ) -> Result<(), OutputError> {
        if index % PROGRESS_INTERVAL == 0 || index == total {
            self.line(format!("Progress: {}/{} URLs checked", index, total))?;
        }
        self.line(result_line(result))
    }

    /// Writes the summary and listings, waits for all output to be flushed,
    /// and returns the tally.
    pub async fn finish(self, results: &[RedirectChainResult]) -> Result<Summary, OutputError> {
        let summary = Summary::from_results(results);
        for line in render_summary(&summary, results) {
            self.line(line)?;
        }
        self.out.finish().await?;
        Ok(summary)
    }

    /// Flushes pending output without a summary (used on early exits).
    pub async fn close(self) -> Result<(), OutputError> {
        self.out.finish().await
    }
}

/// The running line printed as soon as a result arrives.
pub fn result_line(result: &RedirectChainResult) -> String {
    match classify(result) {
        Outcome::Error => {
            let error = result
                .error
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default();
            format!("❌ ERROR: {} - {}", result.url, error)
        }
        Outcome::HomeRedirect => format!(
            "🏠 HOME REDIRECT: {} → {} (step {})",
            result.url,
            result.final_url(),
            result.home_at_step.unwrap_or_default()
        ),
        Outcome::HttpError(404) => format!("❌ 404: {}", result.url),
        Outcome::HttpError(code) => format!("⚠️  {}: {}", code, result.url),
        Outcome::Redirect => format!(
            "🔄 REDIRECT: {} → {} ({} hop(s))",
            result.url,
            result.final_url(),
            result.redirect_count()
        ),
        Outcome::Success => format!("✅ OK: {}", result.url),
        Outcome::Other(Some(code)) => format!("ℹ️  {}: {}", code, result.url),
        Outcome::Other(None) => format!("ℹ️  no status: {}", result.url),
    }
}
