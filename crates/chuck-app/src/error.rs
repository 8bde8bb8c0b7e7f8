//! Controller error types.

use chuck_client::ChuckApiError;
use chuck_store::StoreError;

/// Errors from a controller action. Every variant means the collection
/// was left exactly as it was before the action.
#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    /// The fetcher failed (network or malformed response).
    #[error("failed to fetch a joke: {0}")]
    Fetch(#[from] ChuckApiError),

    /// Every fetch attempt returned a joke that is already stored.
    #[error("gave up after {attempts} fetches that all returned jokes already stored")]
    DuplicatesExhausted { attempts: u32 },

    /// Persisting the updated collection failed.
    #[error("failed to save jokes: {0}")]
    Storage(#[from] StoreError),
}

impl ControllerError {
    /// Whether this error is the fetch-failure class shown to the user as
    /// a connection alert.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, Self::Fetch(_))
    }
}
