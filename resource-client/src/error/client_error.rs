//! HTTP client and network errors.

use thiserror::Error;

/// Errors from the reqwest transport.
///
/// Produced by [`ApiClient`](crate::ApiClient); the endpoint handler
/// forwards them without inspection.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed due to network or protocol error.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned a non-success HTTP status code.
    #[error("HTTP {status}: {message}")]
    HttpStatus {
        /// The HTTP status code returned.
        status: u16,
        /// Error message from the response body.
        message: String,
    },

    /// Request exceeded the configured timeout.
    #[error("Request timeout after {duration_ms}ms")]
    Timeout {
        /// The timeout duration in milliseconds.
        duration_ms: u64,
    },

    /// Failed to establish connection to the server.
    #[error("Connection failed: {0}")]
    Connection(String),
}

impl ClientError {
    /// Returns `true` if re-sending the same request may succeed.
    ///
    /// Timeouts, connection failures, 5xx and 429 responses qualify.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout { .. } | Self::Connection(_) => true,
            Self::HttpStatus { status, .. } => *status >= 500 || *status == 429,
            Self::Request(e) => e.is_timeout() || e.is_connect(),
        }
    }

    /// Returns the HTTP status code if the server answered.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
