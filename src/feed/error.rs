//! Error types for feed fetching and parsing.

use thiserror::Error;

/// Errors that can occur while fetching or parsing a program's search feed.
///
/// All variants are recovered per-program: the runner logs the error and
/// treats the program as having zero episodes.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level error (DNS resolution, connection refused, timeout, etc.)
    #[error("network error fetching {url}: {source}")]
    Network {
        /// The feed URL that failed.
        url: String,
        /// The underlying network error.
        #[source]
        source: reqwest::Error,
    },

    /// HTTP error response (4xx client errors, 5xx server errors).
    #[error("HTTP {status} fetching {url}")]
    HttpStatus {
        /// The feed URL that returned an error status.
        url: String,
        /// The HTTP status code.
        status: u16,
    },

    /// The response body is not a parsable RSS document.
    #[error("failed to parse feed from {url}: {source}")]
    Parse {
        /// The feed URL whose body failed to parse.
        url: String,
        /// The underlying RSS parse error.
        #[source]
        source: rss::Error,
    },
}

impl FetchError {
    /// Creates a network error from a reqwest error.
    pub fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            url: url.into(),
            source,
        }
    }

    /// Creates an HTTP status error.
    pub fn http_status(url: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
        }
    }

    /// Creates a parse error from an RSS error.
    pub fn parse(url: impl Into<String>, source: rss::Error) -> Self {
        Self::Parse {
            url: url.into(),
            source,
        }
    }
}
