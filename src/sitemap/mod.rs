// src/sitemap/mod.rs
// =============================================================================
// This module reads sitemap files.
//
// A sitemap (https://www.sitemaps.org/protocol.html) is an XML document:
//
//   <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//     <url><loc>https://example.com/docs</loc></url>
//     ...
//   </urlset>
//
// We only need the <loc> of every <url> entry, in document order, kept
// exactly as written.
// =============================================================================

mod reader;

pub use reader::{load_urls, parse_sitemap, read_sitemap, SITEMAP_NAMESPACE};
