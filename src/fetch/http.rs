// src/fetch/http.rs
// =============================================================================
// Fetches pages over HTTP.
//
// Key functionality:
// - Plain GET with a browser-like User-Agent (some sites refuse bare clients)
// - One timeout for the whole request, 8 seconds unless configured
// - Only 2xx responses count as success
// - Failures are sorted into timeout / HTTP status / connection / other so
//   the logs say what actually went wrong
//
// One client is built per run and reused for every page, which keeps the
// connection pool warm during a crawl.
// =============================================================================

use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;

use super::Fetcher;

/// Sent with every request.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                              (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("request to {url} timed out")]
    Timeout { url: String },
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: StatusCode },
    #[error("could not connect to {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(FetchError::Client)?;
        Ok(HttpFetcher { client })
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let parsed = reqwest::Url::parse(url).map_err(|e| FetchError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| categorize_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        response.text().await.map_err(|e| categorize_error(url, e))
    }
}

// Sorts a reqwest error into the variant the logs should show
fn categorize_error(url: &str, error: reqwest::Error) -> FetchError {
    let url = url.to_string();
    if error.is_timeout() {
        FetchError::Timeout { url }
    } else if error.is_connect() {
        FetchError::Connect { url, source: error }
    } else {
        FetchError::Request { url, source: error }
    }
}
