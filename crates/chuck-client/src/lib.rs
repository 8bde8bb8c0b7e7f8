//! # chuck-client: Typed Rust client for the jokes API
//!
//! Provides typed access to `https://api.chucknorris.io`. The only
//! operation the application needs is [`JokeSource::fetch_random`], one
//! `GET /jokes/random` per call.
//!
//! ## Trust Boundary
//!
//! Responses are validated into [`chuck_core::Joke`] before they leave this
//! crate. A response that is not JSON, or is JSON without a usable `id` and
//! `value`, is an error, not a joke.
//!
//! ## Error Classes
//!
//! | Variant | Class |
//! |---------|-------|
//! | `Http`, `ApiError` | network (see [`ChuckApiError::is_network`]) |
//! | `Deserialization`, `Validation` | malformed response |
//! | `Config` | bad base URL |

pub mod config;
pub mod error;
pub mod jokes;
pub mod source;

pub use config::{ChuckApiConfig, ConfigError};
pub use error::ChuckApiError;
pub use source::JokeSource;

use std::time::Duration;

/// `User-Agent` sent with every request.
const USER_AGENT: &str = concat!("chuck/", env!("CARGO_PKG_VERSION"));

/// Top-level jokes API client.
#[derive(Debug, Clone)]
pub struct ChuckClient {
    jokes: jokes::JokesClient,
}

impl ChuckClient {
    /// Create a new client from configuration.
    pub fn new(config: ChuckApiConfig) -> Result<Self, ChuckApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ChuckApiError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;

        Ok(Self {
            jokes: jokes::JokesClient::new(http, config.base_url),
        })
    }

    /// Access the jokes endpoints.
    pub fn jokes(&self) -> &jokes::JokesClient {
        &self.jokes
    }
}

#[async_trait::async_trait]
impl JokeSource for ChuckClient {
    async fn fetch_random(&self) -> Result<chuck_core::Joke, ChuckApiError> {
        self.jokes.random().await
    }
}
