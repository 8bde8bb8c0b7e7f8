//! The fetcher seam the controller depends on.

use chuck_core::Joke;

use crate::error::ChuckApiError;

/// Something that can produce one random joke per call.
///
/// [`crate::ChuckClient`] is the production implementation; tests swap in
/// scripted sources.
#[async_trait::async_trait]
pub trait JokeSource: Send + Sync {
    /// Fetch one random joke. One suspension point, no retries.
    async fn fetch_random(&self) -> Result<Joke, ChuckApiError>;
}
