// src/extract/links.rs
// =============================================================================
// Pulls anchor links out of a fetched page.
//
// Every <a href> is resolved against the page's own URL, the way a browser
// would, so "/docs" on https://example.com/page becomes
// https://example.com/docs. Fragments are kept, so "page#a" and "page#b" are
// two different links as far as the crawler is concerned.
//
// Filtering (host, prefix, visited) is the crawler's job. This module only
// turns markup into absolute URLs, in document order, duplicates included.
// =============================================================================

use scraper::{Html, Selector};
use url::Url;

/// Returns every anchor target in `html` as an absolute URL.
///
/// Hrefs that cannot be resolved (e.g. `http://[broken`) are skipped.
pub fn extract_links(html: &str, page_url: &Url) -> Vec<Url> {
    let document = Html::parse_document(html);

    let Ok(selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| resolve_link(page_url, href))
        .collect()
}

// Resolves a possibly-relative href against the page URL
fn resolve_link(base: &Url, href: &str) -> Option<Url> {
    match base.join(href.trim()) {
        Ok(url) => Some(url),
        Err(e) => {
            tracing::debug!(href, error = %e, "skipping unresolvable link");
            None
        }
    }
}
