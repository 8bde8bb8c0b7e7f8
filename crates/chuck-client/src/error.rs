//! Jokes API client error types.

use chuck_core::ValidationError;

/// Errors from jokes API calls.
#[derive(Debug, thiserror::Error)]
pub enum ChuckApiError {
    /// HTTP transport error (offline, DNS, timeout, connection refused).
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// The API returned a non-2xx status.
    #[error("jokes API {endpoint} returned {status}: {body}")]
    ApiError {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// The response body is not JSON.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        source: serde_json::Error,
    },
    /// The response is JSON but not a valid joke record.
    #[error("invalid joke from {endpoint}: {source}")]
    Validation {
        endpoint: String,
        source: ValidationError,
    },
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

impl ChuckApiError {
    /// Transport failures and non-success statuses: the request itself did
    /// not produce a usable response.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Http { .. } | Self::ApiError { .. })
    }
}
