// src/checker/home.rs
// =============================================================================
// The set of "home page" urls.
//
// When a documentation page is deleted, sites often redirect it to a generic
// landing page instead of returning 404. That hides broken links, so the
// resolver flags any chain that lands on one of these urls.
//
// Urls are compared after removing trailing slashes, so
// "https://example.com/learn" and "https://example.com/learn/" are the same.
// =============================================================================

use std::collections::HashSet;

/// Normalized set of landing-page urls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomePages {
    urls: HashSet<String>,
}

impl HomePages {
    /// Builds the set from any list of urls.
    pub fn new<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let urls = urls
            .into_iter()
            .map(|url| normalize(url.as_ref()).to_string())
            .collect();
        Self { urls }
    }

    /// True if `url` is one of the home pages (ignoring trailing slashes).
    pub fn contains(&self, url: &str) -> bool {
        self.urls.contains(normalize(url))
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

// Strips every trailing '/'. A url made only of slashes becomes empty,
// which never matches a real entry.
fn normalize(url: &str) -> &str {
    url.trim_end_matches('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_ignored() {
        let home = HomePages::new(["https://example.com/learn/"]);
        assert!(home.contains("https://example.com/learn"));
        assert!(home.contains("https://example.com/learn/"));
        assert!(home.contains("https://example.com/learn//"));
    }

    #[test]
    fn test_other_pages_do_not_match() {
        let home = HomePages::new(["https://example.com"]);
        assert!(home.contains("https://example.com/"));
        assert!(!home.contains("https://example.com/docs"));
        assert!(!home.contains("http://example.com"));
    }

    #[test]
    fn test_duplicates_collapse() {
        let home = HomePages::new(["https://a.com", "https://a.com/"]);
        assert_eq!(home.len(), 1);
        assert!(!home.is_empty());
        assert!(HomePages::default().is_empty());
    }
}
