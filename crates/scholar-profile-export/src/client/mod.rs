//! Google Scholar page fetcher.
//!
//! Provides a plain async HTTP client with:
//! - A browser User-Agent on every request
//! - No retry and no timeout unless configured
//! - Non-success statuses surfaced as [`ClientError::Status`]

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

use crate::config::Config;
use crate::error::{ClientError, ClientResult};

/// Anything that can hand out result pages by offset.
///
/// The paginator only talks to this trait, so a scripted source can stand in
/// for Scholar.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the raw HTML of the page starting at `offset`.
    async fn fetch(&self, offset: usize, page_size: usize) -> ClientResult<String>;
}

/// Build the URL of one result page.
///
/// Scholar profile URLs already carry `?user=...`, so the paging parameters
/// are appended with `&`. A URL without a query string gets `?` instead.
#[must_use]
pub fn page_url(base_url: &str, offset: usize, page_size: usize) -> String {
    let separator = if base_url.contains('?') { '&' } else { '?' };
    format!("{base_url}{separator}cstart={offset}&pagesize={page_size}")
}

/// HTTP client for one Scholar profile.
#[derive(Clone)]
pub struct ScholarClient {
    /// HTTP client with default headers.
    client: Client,

    /// Profile URL the paging parameters are appended to.
    base_url: String,
}

impl ScholarClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the User-Agent is not a valid header value or the
    /// HTTP client cannot be built.
    pub fn new(config: &Config) -> ClientResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_str(&config.user_agent)?);

        let mut builder = Client::builder().default_headers(headers).gzip(true);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self { client: builder.build()?, base_url: config.base_url.clone() })
    }

    /// GET a page and return its body.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Status`] for non-success statuses and
    /// [`ClientError::Http`] for transport failures.
    pub async fn fetch_page(&self, url: &str) -> ClientResult<String> {
        tracing::debug!(url, "Fetching page");

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            tracing::warn!(url, status = status.as_u16(), "Page request failed");
            let text = response.text().await.unwrap_or_default();
            let message = if text.is_empty() {
                status.canonical_reason().unwrap_or_default().to_string()
            } else {
                text
            };
            return Err(ClientError::status(status.as_u16(), message));
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl PageSource for ScholarClient {
    async fn fetch(&self, offset: usize, page_size: usize) -> ClientResult<String> {
        let url = page_url(&self.base_url, offset, page_size);
        self.fetch_page(&url).await
    }
}

impl std::fmt::Debug for ScholarClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScholarClient").field("base_url", &self.base_url).finish()
    }
}
