//! # chuck-store: Joke Persistence
//!
//! Two layers:
//!
//! 1. **Storage facility** ([`KeyValueStore`]): string keys to string
//!    values, the way a browser's `localStorage` works. Two facilities ship
//!    here: [`FileKeyValueStore`] (one JSON file on disk) and
//!    [`MemoryKeyValueStore`] (process-local, for tests and doubles).
//! 2. **Repository** ([`JokeRepository`]): serializes the whole
//!    [`chuck_core::JokeCollection`] as a JSON array under
//!    [`chuck_core::STORAGE_KEY`]. Every save is a full overwrite.
//!    [`JokeRepository::lock`] serializes load-change-save sequences
//!    across every writer of the same facility.
//!
//! ## Corrupted State
//!
//! A persisted value that does not parse as a joke array loads as an empty
//! collection and logs a warning. The next save overwrites it.

pub mod error;
pub mod facility;
pub mod file;
pub mod repository;

pub use error::StoreError;
pub use facility::{FacilityLock, KeyValueStore, MemoryKeyValueStore};
pub use file::FileKeyValueStore;
pub use repository::JokeRepository;
