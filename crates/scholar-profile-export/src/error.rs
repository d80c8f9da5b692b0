//! Error types for the profile exporter.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

use std::fmt;

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, body decoding)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Unexpected status {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body or reason phrase
        message: String,
    },

    /// A configured header value could not be encoded
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

impl ClientError {
    /// Create a status error.
    #[must_use]
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status { status, message: message.into() }
    }

    /// Returns true if a later attempt could plausibly succeed.
    ///
    /// The exporter never retries on its own; callers that wrap it can.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http(err) => err.is_timeout() || err.is_connect(),
            Self::Status { status, .. } => *status == 429 || (500..=599).contains(status),
            Self::InvalidHeader(_) => false,
        }
    }

    /// HTTP status code, if the server answered at all.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors raised while pulling fields out of a publication row.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// A required element is absent from the row
    #[error("row is missing its {element} element")]
    MissingElement {
        /// Which element was expected (title, authors, year)
        element: &'static str,
    },
}

impl ExtractError {
    /// Create a missing element error.
    #[must_use]
    pub const fn missing(element: &'static str) -> Self {
        Self::MissingElement { element }
    }
}

/// Why a pagination run ended.
///
/// Every variant still yields the records gathered before the stop; only
/// [`ScrapeError`] discards them.
#[derive(Debug)]
pub enum StopReason {
    /// A fetched page contained no publication rows.
    NoMoreResults {
        /// Offset of the empty page
        offset: usize,
    },

    /// The configured page cap was reached.
    PageLimit {
        /// Number of pages fetched
        pages: usize,
    },

    /// A row on the page could not be extracted.
    MalformedRow {
        /// Offset of the page holding the row
        offset: usize,
        /// Zero-based row index within the page
        row: usize,
        /// What went wrong
        error: ExtractError,
    },

    /// The page could not be fetched.
    FetchFailed {
        /// Offset of the page that failed
        offset: usize,
        /// Underlying client error
        error: ClientError,
    },
}

impl StopReason {
    /// Returns true when pagination ended because results ran out or the cap was hit.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        matches!(self, Self::NoMoreResults { .. } | Self::PageLimit { .. })
    }
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoMoreResults { offset } => write!(f, "no more results at offset {offset}"),
            Self::PageLimit { pages } => write!(f, "page limit reached after {pages} pages"),
            Self::MalformedRow { offset, row, error } => {
                write!(f, "malformed row {row} on page at offset {offset}: {error}")
            }
            Self::FetchFailed { offset, error } => {
                write!(f, "fetch failed at offset {offset}: {error}")
            }
        }
    }
}

/// Errors that abort a pagination run outright.
#[derive(thiserror::Error, Debug)]
pub enum ScrapeError {
    /// Fetching a page failed and the policy says to abort
    #[error("failed to fetch page at offset {offset}: {source}")]
    Fetch {
        /// Offset of the page that failed
        offset: usize,
        /// Underlying client error
        #[source]
        source: ClientError,
    },
}

/// Errors from writing the output file.
#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors from the interactive URL prompt.
#[derive(thiserror::Error, Debug)]
pub enum InputError {
    /// Reading stdin or writing the prompt failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Nothing usable was entered
    #[error("no profile URL entered")]
    Empty,
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_retryable() {
        assert!(ClientError::status(429, "Too Many Requests").is_retryable());
        assert!(ClientError::status(503, "Service Unavailable").is_retryable());

        assert!(!ClientError::status(404, "Not Found").is_retryable());
        assert!(!ClientError::status(403, "Forbidden").is_retryable());
    }

    #[test]
    fn test_status_code() {
        assert_eq!(ClientError::status(404, "gone").status_code(), Some(404));
    }

    #[test]
    fn test_stop_reason_clean() {
        assert!(StopReason::NoMoreResults { offset: 200 }.is_clean());
        assert!(StopReason::PageLimit { pages: 3 }.is_clean());

        let malformed = StopReason::MalformedRow {
            offset: 200,
            row: 4,
            error: ExtractError::missing("year"),
        };
        assert!(!malformed.is_clean());

        let fetch = StopReason::FetchFailed { offset: 0, error: ClientError::status(500, "") };
        assert!(!fetch.is_clean());
    }

    #[test]
    fn test_stop_reason_display() {
        let reason = StopReason::MalformedRow {
            offset: 100,
            row: 7,
            error: ExtractError::missing("year"),
        };
        let text = reason.to_string();
        assert!(text.contains("row 7"));
        assert!(text.contains("offset 100"));
        assert!(text.contains("year"));
    }
}
