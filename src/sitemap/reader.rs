// src/sitemap/reader.rs
// =============================================================================
// Extracts the <loc> urls from a sitemap file.
//
// We use the `xml-rs` pull parser which:
// - Streams the document as events (no full DOM in memory)
// - Resolves namespaces, so <url> and <loc> are only picked up when they
//   belong to the sitemaps.org 0.9 schema
// - Rejects documents that are not well-formed XML
//
// Every <url> entry yields its <loc> text exactly as written (trimmed). We
// do NOT parse it as a url here: a bad entry still shows up in the report
// and fails when it is requested, instead of silently disappearing.
//
// Two entry points:
// - read_sitemap(): returns a Result, for callers that want the error
// - load_urls(): logs the error and returns an empty list instead; the
//   binary treats "no urls" as fatal, so it never has to match on errors
// =============================================================================

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use log::{debug, error, warn};
use xml::name::OwnedName;
use xml::reader::{EventReader, XmlEvent};

use crate::error::SitemapError;

/// Namespace every <urlset>/<url>/<loc> element must belong to.
pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Reads every url listed in the sitemap at `path`, in document order.
pub fn read_sitemap(path: &Path) -> Result<Vec<String>, SitemapError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => SitemapError::NotFound(path.to_path_buf()),
        _ => SitemapError::Io(e),
    })?;

    let urls = parse_sitemap(BufReader::new(file))?;
    debug!("Read {} urls from {}", urls.len(), path.display());
    Ok(urls)
}

/// Parses a sitemap document from any reader.
///
/// Only direct <url> children of the root, and the first direct <loc> of
/// each, are read, and only when they are in the sitemaps.org namespace.
/// Fails on the first XML error: a sitemap that is not well-formed yields
/// no urls at all, even if some entries were readable before the error.
pub fn parse_sitemap<R: Read>(source: R) -> Result<Vec<String>, SitemapError> {
    let mut urls = Vec::new();

    // Element depth: 1 = root, 2 = <url>, 3 = <loc>
    let mut depth = 0usize;
    let mut in_url = false;
    let mut loc_taken = false;
    let mut loc_text: Option<String> = None;

    for event in EventReader::new(source) {
        let event = event.map_err(|e| SitemapError::Parse(e.to_string()))?;

        match event {
            XmlEvent::StartElement { name, .. } => {
                depth += 1;
                match depth {
                    1 if !in_sitemap_namespace(&name) => {
                        warn!(
                            "Root element <{}> is not in the {} namespace; no urls will be read",
                            name.local_name, SITEMAP_NAMESPACE
                        );
                    }
                    2 if is_sitemap_element(&name, "url") => {
                        in_url = true;
                        loc_taken = false;
                    }
                    3 if in_url && !loc_taken && is_sitemap_element(&name, "loc") => {
                        loc_text = Some(String::new());
                    }
                    _ => {}
                }
            }
            XmlEvent::Characters(text) | XmlEvent::CData(text) | XmlEvent::Whitespace(text) => {
                // Only text directly inside <loc>, not inside its children
                if depth == 3 {
                    if let Some(loc) = loc_text.as_mut() {
                        loc.push_str(&text);
                    }
                }
            }
            XmlEvent::EndElement { .. } => {
                if depth == 3 {
                    if let Some(loc) = loc_text.take() {
                        urls.push(loc.trim().to_string());
                        loc_taken = true;
                    }
                } else if depth == 2 && in_url {
                    if !loc_taken {
                        warn!("Skipping <url> entry without a <loc>");
                    }
                    in_url = false;
                }
                depth = depth.saturating_sub(1);
            }
            _ => {}
        }
    }

    Ok(urls)
}

/// Like `read_sitemap`, but logs failures and returns an empty list.
pub fn load_urls(path: &Path) -> Vec<String> {
    match read_sitemap(path) {
        Ok(urls) => urls,
        Err(e) => {
            error!("{}", e);
            Vec::new()
        }
    }
}

fn in_sitemap_namespace(name: &OwnedName) -> bool {
    name.namespace.as_deref() == Some(SITEMAP_NAMESPACE)
}

fn is_sitemap_element(name: &OwnedName, local_name: &str) -> bool {
    in_sitemap_namespace(name) && name.local_name == local_name
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SITEMAP: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url>
    <loc>https://example.com/learn/docs/getting-started</loc>
  </url>
  <url>
    <loc>https://example.com/learn/sdks/overview</loc>
    <lastmod>2024-01-01</lastmod>
  </url>
  <url>
    <loc>https://example.com/learn/api-definition/introduction</loc>
  </url>
</urlset>"#;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_urls_in_document_order() {
        let urls = parse_sitemap(SITEMAP.as_bytes()).unwrap();
        assert_eq!(
            urls,
            vec![
                "https://example.com/learn/docs/getting-started",
                "https://example.com/learn/sdks/overview",
                "https://example.com/learn/api-definition/introduction",
            ]
        );
    }

    #[test]
    fn test_every_loc_is_kept_as_written() {
        let xml = r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url><loc>https://example.com</loc></url>
  <url><loc>
      https://example.com/a b
  </loc></url>
  <url><loc>/relative</loc></url>
</urlset>"#;
        let urls = parse_sitemap(xml.as_bytes()).unwrap();
        // No trailing slash added, no percent-encoding, nothing dropped
        assert_eq!(
            urls,
            vec!["https://example.com", "https://example.com/a b", "/relative"]
        );
    }

    #[test]
    fn test_prefixed_namespace() {
        let xml = r#"<sm:urlset xmlns:sm="http://www.sitemaps.org/schemas/sitemap/0.9">
  <sm:url><sm:loc>https://example.com/a</sm:loc></sm:url>
</sm:urlset>"#;
        assert_eq!(
            parse_sitemap(xml.as_bytes()).unwrap(),
            vec!["https://example.com/a"]
        );
    }

    #[test]
    fn test_wrong_namespace_yields_no_urls() {
        let other = r#"<urlset xmlns="http://example.org/other">
  <url><loc>https://example.com/x</loc></url>
</urlset>"#;
        assert!(parse_sitemap(other.as_bytes()).unwrap().is_empty());

        let none = r#"<urlset><url><loc>https://example.com/x</loc></url></urlset>"#;
        assert!(parse_sitemap(none.as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_only_first_loc_of_each_url() {
        let xml = r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url><loc>https://example.com/a</loc><loc>https://example.com/dup</loc></url>
  <url><lastmod>2024-01-01</lastmod></url>
  <url><loc>https://example.com/b</loc></url>
</urlset>"#;
        assert_eq!(
            parse_sitemap(xml.as_bytes()).unwrap(),
            vec!["https://example.com/a", "https://example.com/b"]
        );
    }

    #[test]
    fn test_read_from_file() {
        let file = write_temp(SITEMAP);
        let urls = read_sitemap(file.path()).unwrap();
        assert_eq!(urls.len(), 3);
    }

    #[test]
    fn test_empty_urlset() {
        let xml = r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9"></urlset>"#;
        assert!(parse_sitemap(xml.as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_file() {
        let path = Path::new("definitely/not/here/docs.xml");
        let err = read_sitemap(path).unwrap_err();
        assert!(matches!(err, SitemapError::NotFound(_)));
        assert!(load_urls(path).is_empty());
    }

    #[test]
    fn test_malformed_xml() {
        let xml = r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url><loc>https://example.com/a</loc></url>
  <url><loc>https://example.com/b</loc>"#;
        let err = parse_sitemap(xml.as_bytes()).unwrap_err();
        match &err {
            SitemapError::Parse(message) => {
                // Display text from the parser, not a Debug dump
                assert!(!message.is_empty());
                assert!(!message.contains("Error {"), "{}", message);
            }
            other => panic!("expected a parse error, got {}", other),
        }

        let file = write_temp(xml);
        assert!(load_urls(file.path()).is_empty());
    }
}
