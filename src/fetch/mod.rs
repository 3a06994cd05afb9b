// src/fetch/mod.rs
// =============================================================================
// Page fetching.
//
// The crawler and the single-page modes only see the `Fetcher` trait: give it
// a URL, get the raw HTML back or a `FetchError`. `HttpFetcher` is the real
// implementation; tests drive the crawler with an in-memory site instead.
// =============================================================================

mod http;

pub use http::{FetchError, HttpFetcher};

use std::future::Future;

pub trait Fetcher {
    /// Fetches `url` and returns the response body.
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, FetchError>> + Send;
}
