//! # Joke Repository
//!
//! Reads and writes the entire joke collection under
//! [`STORAGE_KEY`](chuck_core::STORAGE_KEY). There are no partial writes:
//! every save serializes the full collection and replaces the stored value
//! in one facility call.

use std::sync::Arc;

use chuck_core::{JokeCollection, STORAGE_KEY};

use crate::error::StoreError;
use crate::facility::{FacilityLock, KeyValueStore};

/// Load/save adapter between a [`KeyValueStore`] and a [`JokeCollection`].
#[derive(Debug, Clone)]
pub struct JokeRepository {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl JokeRepository {
    /// Repository over `store` using the well-known key.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(store, STORAGE_KEY)
    }

    /// Repository over `store` using a custom key.
    pub fn with_key(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Exclusive use of the underlying facility, for a load-change-save
    /// sequence that must not interleave with another writer.
    pub fn lock(&self) -> Result<FacilityLock, StoreError> {
        self.store.lock()
    }

    /// Load the stored collection.
    ///
    /// Never fails: an absent key is an empty collection, and an unreadable
    /// facility or malformed value is logged and also treated as empty.
    pub fn load(&self) -> JokeCollection {
        match self.try_load() {
            Ok(jokes) => jokes,
            Err(e) => {
                tracing::warn!(key = %self.key, "ignoring unreadable joke collection: {e}");
                JokeCollection::new()
            }
        }
    }

    /// Load the stored collection, surfacing read and parse failures.
    pub fn try_load(&self) -> Result<JokeCollection, StoreError> {
        match self.store.get_item(&self.key)? {
            None => Ok(JokeCollection::new()),
            Some(raw) => {
                let jokes: JokeCollection = serde_json::from_str(&raw)?;
                tracing::debug!(key = %self.key, count = jokes.len(), "loaded jokes");
                Ok(jokes)
            }
        }
    }

    /// Serialize `jokes` and overwrite the stored value.
    pub fn save(&self, jokes: &JokeCollection) -> Result<(), StoreError> {
        let raw = serde_json::to_string(jokes)?;
        self.store.set_item(&self.key, &raw)?;
        tracing::debug!(key = %self.key, count = jokes.len(), "saved jokes");
        Ok(())
    }
}
