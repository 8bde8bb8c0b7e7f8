//! # Application Context
//!
//! Everything the controller needs, built once at startup and handed over
//! explicitly: the storage facility, the joke source, and the retry cap.
//! Tests build one from a [`MemoryKeyValueStore`](chuck_store::MemoryKeyValueStore)
//! and a scripted source.

use std::sync::Arc;

use chuck_client::JokeSource;
use chuck_store::KeyValueStore;

/// Default cap on fetches per fetch-and-add when the API keeps returning
/// jokes that are already stored.
pub const DEFAULT_MAX_FETCH_ATTEMPTS: u32 = 10;

/// Handles shared by every controller action.
#[derive(Clone)]
pub struct AppContext {
    pub store: Arc<dyn KeyValueStore>,
    pub source: Arc<dyn JokeSource>,
    /// Upper bound on fetches in one fetch-and-add. Always at least 1.
    pub max_fetch_attempts: u32,
}

impl AppContext {
    pub fn new(store: Arc<dyn KeyValueStore>, source: Arc<dyn JokeSource>) -> Self {
        Self {
            store,
            source,
            max_fetch_attempts: DEFAULT_MAX_FETCH_ATTEMPTS,
        }
    }

    /// Override the retry cap. Zero is raised to one.
    pub fn with_max_fetch_attempts(mut self, attempts: u32) -> Self {
        self.max_fetch_attempts = attempts.max(1);
        self
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("store", &self.store)
            .field("source", &"<dyn JokeSource>")
            .field("max_fetch_attempts", &self.max_fetch_attempts)
            .finish()
    }
}
