//! Error Types
//!
//! `ApiError` is the single "remote operation failed" kind. Its variants only
//! feed the log line; the sync client treats them all alike.

use thiserror::Error;

/// A remote operation failed.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request could not be sent or the response could not be read
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("server responded with status {status}")]
    Status { status: u16 },

    /// Response body was not the expected JSON
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Base URL cannot take the endpoint path
    #[error("cannot build endpoint from base url {0}")]
    Endpoint(String),
}

/// Result type alias for remote operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Invalid build-time configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid base url {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
