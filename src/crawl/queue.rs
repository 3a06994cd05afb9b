// src/crawl/queue.rs
// =============================================================================
// Breadth-first crawl of one site, analyzing every page it reaches.
//
// How it works:
// 1. The frontier starts as [start_url]
// 2. Pop the front URL; if it was already visited, drop it and pop again
// 3. Mark it visited (this counts against max_pages even if the fetch fails)
// 4. Fetch it; on failure log and move on, no report and no links
// 5. Extract the page text, analyze it, append the PageReport
// 6. Resolve every <a href> and queue it at the back if it is on the same
//    host, not yet visited, and its text starts with start_url
// 7. Stop when the frontier is empty or max_pages URLs have been visited
//
// The prefix check in step 6 is literal string matching against the seed, not
// a path comparison. Seeding with https://example.com/docs/ keeps the crawl
// under /docs/, and a link that differs only in scheme is skipped. The seed is
// parsed once and its serialized form is what gets queued and matched, so it
// reads the same way as every link resolved from it (lowercase host, default
// port dropped, path percent-encoded).
//
// Frontier, visited set and report are owned by one call; nothing survives
// between runs.
// =============================================================================

use std::collections::{HashSet, VecDeque};

use thiserror::Error;
use url::Url;

use crate::analysis::Analyzer;
use crate::config::ExclusionSet;
use crate::extract::{extract_full_page_text, extract_links};
use crate::fetch::Fetcher;
use crate::report::DomainReport;

#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("invalid start URL '{url}': {source}")]
    InvalidSeed {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("start URL has no host: {0}")]
    NoHost(String),
}

/// Crawls up to `max_pages` pages reachable from `start_url` and analyzes each one.
///
/// Only an unusable `start_url` is an error; failed page fetches are logged
/// and skipped, so the returned report may hold fewer pages than were visited.
pub async fn crawl_domain<F: Fetcher>(
    fetcher: &F,
    analyzer: &Analyzer,
    exclusions: &ExclusionSet,
    start_url: &str,
    max_pages: usize,
) -> Result<DomainReport, CrawlError> {
    let seed = Url::parse(start_url).map_err(|source| CrawlError::InvalidSeed {
        url: start_url.to_string(),
        source,
    })?;
    let seed_host = netloc(&seed).ok_or_else(|| CrawlError::NoHost(start_url.to_string()))?;
    let prefix = seed.as_str();

    let mut frontier: VecDeque<String> = VecDeque::from([prefix.to_string()]);
    let mut visited: HashSet<String> = HashSet::new();
    let label = typed_authority(start_url).unwrap_or_else(|| seed_host.clone());
    let mut report = DomainReport::new(label);

    while visited.len() < max_pages {
        let Some(url) = frontier.pop_front() else {
            break;
        };
        if !visited.insert(url.clone()) {
            continue;
        }

        tracing::info!(page = visited.len(), max_pages, url = %url, "crawling");

        let html = match fetcher.fetch(&url).await {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "fetch failed, skipping page");
                continue;
            }
        };

        let text = extract_full_page_text(&html);
        report.push(analyzer.analyze(&url, &text, exclusions));

        let page_url = match Url::parse(&url) {
            Ok(page_url) => page_url,
            Err(e) => {
                tracing::debug!(url = %url, error = %e, "cannot resolve links on page");
                continue;
            }
        };

        let mut queued = 0;
        for link in extract_links(&html, &page_url) {
            if netloc(&link).as_deref() != Some(seed_host.as_str()) {
                continue;
            }
            let link = String::from(link);
            if visited.contains(&link) || !link.starts_with(prefix) {
                continue;
            }
            frontier.push_back(link);
            queued += 1;
        }
        tracing::debug!(url = %url, queued, frontier = frontier.len(), "links queued");
    }

    tracing::info!(
        domain = %report.label,
        visited = visited.len(),
        reported = report.len(),
        "crawl finished"
    );
    Ok(report)
}

// Host plus explicit port, the part of a URL two pages must share to be "same domain"
fn netloc(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    })
}

// The authority as the user typed it ("A.test:80"), used only as the report label
fn typed_authority(start_url: &str) -> Option<String> {
    let (_, rest) = start_url.split_once("://")?;
    let authority = rest.split(['/', '?', '#']).next()?;
    let authority = authority.rsplit_once('@').map_or(authority, |(_, host)| host);
    (!authority.is_empty()).then(|| authority.to_string())
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why check visited on pop instead of on push?
//    - The same link can be discovered on many pages before it is crawled
//    - Checking at pop time means a URL is fetched once no matter how often
//      it was queued, and the page cap only counts distinct URLs
//
// 2. Why does a failed fetch still count as visited?
//    - A dead link stays dead for the rest of the run; retrying it from every
//      page that links to it would burn the page budget on errors
//
// 3. Breadth-first without a depth limit
//    - VecDeque gives FIFO order, so pages close to the seed come first
//    - max_pages is the only bound; hop distance is not tracked
// -----------------------------------------------------------------------------
