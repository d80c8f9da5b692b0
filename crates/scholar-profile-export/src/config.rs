//! Configuration for the profile exporter.

use std::path::PathBuf;
use std::time::Duration;

use crate::models::ExportFormat;

/// Google Scholar constants.
pub mod scholar {
    /// Number of publications requested per page (`pagesize`).
    pub const PAGE_SIZE: usize = 100;

    /// Browser User-Agent sent with every request; Scholar blocks library defaults.
    pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

    /// Output file, relative to the working directory.
    pub const DEFAULT_OUTPUT_PATH: &str = "lib/papers_info.json";

    /// Environment variable consulted for the profile URL.
    pub const BASE_URL_ENV: &str = "SCHOLAR_PROFILE_URL";
}

/// What to do when a row cannot be extracted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowErrorPolicy {
    /// Keep the rows before it and end pagination.
    #[default]
    Stop,
    /// Log the row and continue with the next one.
    Skip,
}

/// What to do when a page cannot be fetched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchErrorPolicy {
    /// End pagination and export what was collected.
    #[default]
    Stop,
    /// Fail the whole run; nothing is exported.
    Abort,
}

/// Exporter configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Profile URL, e.g. `https://scholar.google.com/citations?user=XXXX&hl=en`.
    pub base_url: String,

    /// Rows requested per page.
    pub page_size: usize,

    /// User-Agent header value.
    pub user_agent: String,

    /// Per-request timeout. `None` waits indefinitely.
    pub request_timeout: Option<Duration>,

    /// Stop after this many pages.
    pub max_pages: Option<usize>,

    /// Malformed row handling.
    pub row_policy: RowErrorPolicy,

    /// Fetch failure handling.
    pub fetch_policy: FetchErrorPolicy,

    /// Where the records are written.
    pub output_path: PathBuf,

    /// Output encoding.
    pub format: ExportFormat,
}

impl Config {
    /// Create a configuration with the default Scholar settings.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            page_size: scholar::PAGE_SIZE,
            user_agent: scholar::USER_AGENT.to_string(),
            request_timeout: None,
            max_pages: None,
            row_policy: RowErrorPolicy::default(),
            fetch_policy: FetchErrorPolicy::default(),
            output_path: PathBuf::from(scholar::DEFAULT_OUTPUT_PATH),
            format: ExportFormat::default(),
        }
    }

    /// Create a test configuration pointed at a mock server.
    ///
    /// The profile lives at `/citations?user=test` on the mock.
    #[must_use]
    pub fn for_testing(mock_uri: &str) -> Self {
        Self {
            request_timeout: Some(Duration::from_secs(5)),
            max_pages: Some(50), // Guard against runaway loops in tests
            ..Self::new(format!("{mock_uri}/citations?user=test"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::new("https://scholar.google.com/citations?user=abc");
        assert_eq!(config.page_size, 100);
        assert_eq!(config.output_path, PathBuf::from("lib/papers_info.json"));
        assert_eq!(config.format, ExportFormat::Json);
        assert_eq!(config.row_policy, RowErrorPolicy::Stop);
        assert_eq!(config.fetch_policy, FetchErrorPolicy::Stop);
        assert!(config.request_timeout.is_none());
        assert!(config.max_pages.is_none());
    }

    #[test]
    fn test_user_agent_impersonates_browser() {
        let config = Config::new("x");
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
        assert!(config.user_agent.contains("Chrome/120"));
    }

    #[test]
    fn test_for_testing_points_at_mock() {
        let config = Config::for_testing("http://127.0.0.1:9999");
        assert_eq!(config.base_url, "http://127.0.0.1:9999/citations?user=test");
        assert!(config.request_timeout.is_some());
    }
}
