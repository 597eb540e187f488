// src/report/summary.rs
// =============================================================================
// End-of-run tally and detailed listings.
//
// Summary counts one bucket per result (see classify.rs). Home page
// redirects are counted separately from other failures so the listing can
// show them apart, but both make the run fail.
// =============================================================================

use super::classify::{classify, Outcome};
use crate::checker::RedirectChainResult;

const RULE_WIDTH: usize = 60;
const LIST_RULE_WIDTH: usize = 40;

/// Per-bucket counts for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub success: usize,
    pub redirects: usize,
    pub home_redirects: usize,
    pub failed: usize,
    pub other: usize,
}

impl Summary {
    pub fn from_results(results: &[RedirectChainResult]) -> Self {
        let mut summary = Summary::default();
        for result in results {
            summary.record(classify(result));
        }
        summary
    }

    pub fn record(&mut self, outcome: Outcome) {
        self.total += 1;
        match outcome {
            Outcome::Error | Outcome::HttpError(_) => self.failed += 1,
            Outcome::HomeRedirect => self.home_redirects += 1,
            Outcome::Redirect => self.redirects += 1,
            Outcome::Success => self.success += 1,
            Outcome::Other(_) => self.other += 1,
        }
    }

    /// The run is clean when nothing failed and nothing fell back to a home page.
    pub fn is_success(&self) -> bool {
        self.failed == 0 && self.home_redirects == 0
    }

    /// Process exit status for this run.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}

/// Renders the summary block followed by the detailed listings.
///
/// Listings are sorted by url so two runs over the same sitemap read the
/// same, whatever order the results completed in.
pub fn render_summary(summary: &Summary, results: &[RedirectChainResult]) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        "=".repeat(RULE_WIDTH),
        "📊 SUMMARY".to_string(),
        "=".repeat(RULE_WIDTH),
        format!("Total URLs checked: {}", summary.total),
        format!("✅ Successful (200): {}", summary.success),
        format!("🔄 Redirects: {}", summary.redirects),
        format!("🏠 Home page redirects: {}", summary.home_redirects),
        format!("❌ Failed/Errors: {}", summary.failed),
    ];
    if summary.other > 0 {
        lines.push(format!("ℹ️  Other: {}", summary.other));
    }

    let mut sorted: Vec<&RedirectChainResult> = results.iter().collect();
    sorted.sort_by(|a, b| a.url.cmp(&b.url));

    let failed: Vec<_> = sorted
        .iter()
        .filter(|r| matches!(classify(r), Outcome::Error | Outcome::HttpError(_)))
        .collect();
    if !failed.is_empty() {
        section(&mut lines, format!("❌ FAILED URLS ({}):", failed.len()));
        for result in failed {
            match &result.error {
                Some(error) => lines.push(format!("ERROR: {} - {}", result.url, error)),
                None => lines.push(format!(
                    "{}: {}",
                    result.status_code.unwrap_or_default(),
                    result.url
                )),
            }
            if result.redirected() {
                lines.push(format!("    chain: {}", result.chain_display()));
            }
        }
    }

    let home: Vec<_> = sorted
        .iter()
        .filter(|r| classify(r) == Outcome::HomeRedirect)
        .collect();
    if !home.is_empty() {
        section(&mut lines, format!("🏠 HOME PAGE REDIRECTS ({}):", home.len()));
        for result in home {
            lines.push(format!(
                "{} → {} (home page reached at step {})",
                result.url,
                result.final_url(),
                result.home_at_step.unwrap_or_default()
            ));
            lines.push(format!("    chain: {}", result.chain_display()));
        }
    }

    let redirects: Vec<_> = sorted
        .iter()
        .filter(|r| classify(r) == Outcome::Redirect)
        .collect();
    if !redirects.is_empty() {
        section(&mut lines, format!("🔄 REDIRECTED URLS ({}):", redirects.len()));
        for result in redirects {
            lines.push(format!("{} → {}", result.url, result.final_url()));
            if result.redirect_count() > 1 {
                lines.push(format!("    chain: {}", result.chain_display()));
            }
        }
    }

    lines.push(String::new());
    if summary.is_success() {
        lines.push("✅ All URLs resolved cleanly".to_string());
    } else {
        lines.push(format!(
            "❌ Found {} failed URL(s) and {} home page redirect(s)",
            summary.failed, summary.home_redirects
        ));
    }

    lines
}

fn section(lines: &mut Vec<String>, title: String) {
    lines.push(String::new());
    lines.push(title);
    lines.push("-".repeat(LIST_RULE_WIDTH));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RedirectError;

    fn result(chain: &[&str], status: Option<u16>) -> RedirectChainResult {
        RedirectChainResult {
            url: chain[0].to_string(),
            chain: chain.iter().map(|s| s.to_string()).collect(),
            status_code: status,
            error: None,
            home_at_step: None,
        }
    }

    fn sample() -> Vec<RedirectChainResult> {
        let mut home = result(&["https://a.com/old", "https://a.com/"], Some(301));
        home.home_at_step = Some(1);
        let mut timeout = result(&["https://a.com/slow"], None);
        timeout.error = Some(RedirectError::Transport("Request timed out".into()));

        vec![
            result(&["https://a.com/ok"], Some(200)),
            result(&["https://a.com/missing"], Some(404)),
            home,
            result(&["https://a.com/moved", "https://a.com/new"], Some(200)),
            timeout,
            result(&["https://a.com/empty"], Some(204)),
        ]
    }

    #[test]
    fn test_tally() {
        let summary = Summary::from_results(&sample());
        assert_eq!(
            summary,
            Summary {
                total: 6,
                success: 1,
                redirects: 1,
                home_redirects: 1,
                failed: 2,
                other: 1,
            }
        );
        assert!(!summary.is_success());
        assert_eq!(summary.exit_code(), 1);
    }

    #[test]
    fn test_clean_run() {
        let results = vec![
            result(&["https://a.com/ok"], Some(200)),
            result(&["https://a.com/moved", "https://a.com/new"], Some(200)),
        ];
        let summary = Summary::from_results(&results);
        assert!(summary.is_success());
        assert_eq!(summary.exit_code(), 0);

        let lines = render_summary(&summary, &results);
        assert_eq!(lines.last().unwrap(), "✅ All URLs resolved cleanly");
    }

    #[test]
    fn test_home_page_listed_directly_fails_the_run() {
        let mut home = result(&["https://a.com/"], Some(200));
        home.home_at_step = Some(0);
        let summary = Summary::from_results(&[home]);
        assert_eq!(summary.success, 0);
        assert_eq!(summary.home_redirects, 1);
        assert_eq!(summary.exit_code(), 1);
    }

    #[test]
    fn test_only_home_redirects_still_fail() {
        let mut home = result(&["https://a.com/old", "https://a.com/"], Some(301));
        home.home_at_step = Some(1);
        let summary = Summary::from_results(&[home]);
        assert_eq!(summary.failed, 0);
        assert!(!summary.is_success());
    }

    #[test]
    fn test_listings_are_sorted_and_complete() {
        let results = sample();
        let lines = render_summary(&Summary::from_results(&results), &results);
        let text = lines.join("\n");

        assert!(text.contains("❌ FAILED URLS (2):"));
        assert!(text.contains("404: https://a.com/missing"));
        assert!(text.contains("ERROR: https://a.com/slow - Request timed out"));
        assert!(text.contains("🏠 HOME PAGE REDIRECTS (1):"));
        assert!(text.contains("https://a.com/old → https://a.com/ (home page reached at step 1)"));
        assert!(text.contains("🔄 REDIRECTED URLS (1):"));
        assert!(text.contains("ℹ️  Other: 1"));

        // "missing" sorts before "slow"
        let missing = text.find("404: https://a.com/missing").unwrap();
        let slow = text.find("ERROR: https://a.com/slow").unwrap();
        assert!(missing < slow);
    }
}
