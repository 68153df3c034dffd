// src/core/net.rs
// Blocking HTTP GET with a browser-like identity.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, UPGRADE_INSECURE_REQUESTS};
use thiserror::Error;

use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};

/// Markers of an anti-bot interstitial served in place of the real page.
const CHALLENGE_MARKERS: &[&str] = &[
    "cf-chl",
    "challenge-platform",
    "just a moment...",
    "attention required!",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    pub status: u16,
    pub body: String,
}

impl Page {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },
    #[error("{url} served a bot challenge (status {status})")]
    Challenge { url: String, status: u16 },
}

/// Fetch capability. Implementations return whatever the origin answered;
/// status policy lives in `fetch_html`.
pub trait Fetch {
    fn get(&self, url: &str) -> Result<Page, FetchError>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FetchStrategy {
    /// Realistic User-Agent only.
    Basic,
    /// Full browser header profile plus a cookie jar shared across the run,
    /// enough to get past basic automated-client checks.
    #[default]
    Browser,
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(strategy: FetchStrategy) -> Result<Self, FetchError> {
        let mut builder = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS));

        if strategy == FetchStrategy::Browser {
            builder = builder.default_headers(browser_headers()).cookie_store(true);
        }

        let client = builder.build().map_err(FetchError::Client)?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str) -> Result<Page, FetchError> {
        let transport = |source: reqwest::Error| FetchError::Transport { url: s!(url), source };

        let resp = self.client.get(url).send().map_err(transport)?;
        let status = resp.status().as_u16();
        let body = resp.text().map_err(transport)?;
        Ok(Page { status, body })
    }
}

fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-IN,en;q=0.9"));
    headers.insert(UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));
    headers
}

/// True when a non-success page looks like a bot interstitial.
pub fn is_challenge(page: &Page) -> bool {
    if !matches!(page.status, 403 | 429 | 503) {
        return false;
    }
    let body = page.body.to_ascii_lowercase();
    CHALLENGE_MARKERS.iter().any(|m| body.contains(m))
}

/// GET `url` and return the body of a 2xx answer. Anything else is an error.
pub fn fetch_html(fetcher: &dyn Fetch, url: &str) -> Result<String, FetchError> {
    let page = fetcher.get(url)?;
    if page.is_success() {
        return Ok(page.body);
    }
    if is_challenge(&page) {
        return Err(FetchError::Challenge { url: s!(url), status: page.status });
    }
    Err(FetchError::Status { url: s!(url), status: page.status })
}
