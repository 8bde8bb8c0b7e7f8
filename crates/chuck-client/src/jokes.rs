//! Typed client for the jokes endpoints.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET    | `/jokes/random` | One random joke |
//!
//! The response is validated before it becomes a [`Joke`]: it must be a
//! JSON object with a non-empty string `id` and a string `value`. Any other
//! fields (`icon_url`, `url`, `categories`, timestamps) pass through.

use chuck_core::Joke;

use crate::error::ChuckApiError;

/// Path of the random-joke endpoint, relative to the base URL.
pub const RANDOM_PATH: &str = "jokes/random";

/// Client for the jokes endpoints.
#[derive(Debug, Clone)]
pub struct JokesClient {
    http: reqwest::Client,
    base_url: url::Url,
}

impl JokesClient {
    pub(crate) fn new(http: reqwest::Client, base_url: url::Url) -> Self {
        Self { http, base_url }
    }

    /// Fetch one random joke.
    ///
    /// Calls `GET {base_url}/jokes/random`. Exactly one request is made;
    /// failures are not retried.
    pub async fn random(&self) -> Result<Joke, ChuckApiError> {
        let endpoint = "GET /jokes/random";
        let url = self.base_url.join(RANDOM_PATH).map_err(|e| {
            crate::config::ConfigError::InvalidUrl(self.base_url.to_string(), e.to_string())
        })?;

        tracing::debug!(%url, "requesting random joke");

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ChuckApiError::Http {
                endpoint: endpoint.into(),
                source: e,
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(ChuckApiError::ApiError {
                endpoint: endpoint.into(),
                status,
                body,
            });
        }

        let bytes = resp.bytes().await.map_err(|e| ChuckApiError::Http {
            endpoint: endpoint.into(),
            source: e,
        })?;

        let payload: serde_json::Value =
            serde_json::from_slice(&bytes).map_err(|e| ChuckApiError::Deserialization {
                endpoint: endpoint.into(),
                source: e,
            })?;

        let joke = Joke::from_json(payload).map_err(|e| ChuckApiError::Validation {
            endpoint: endpoint.into(),
            source: e,
        })?;

        tracing::debug!(id = %joke.id, "received joke");
        Ok(joke)
    }
}
