//! # chuck-core: Foundational Types for chuck
//!
//! Defines the data model shared by every other crate in the workspace:
//!
//! - [`JokeId`]: API-assigned identifier, validated non-empty.
//! - [`Joke`]: one joke record. Fields the API returns beyond `id` and
//!   `value` are carried through untouched so they survive persistence.
//! - [`JokeCollection`]: the ordered, newest-first collection. The
//!   "no two records share an id" invariant is enforced here, at insertion
//!   time, and nowhere else.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `chuck-*` crates (this is the leaf of the DAG).
//! - No I/O. Storage lives in `chuck-store`, the network in `chuck-client`.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Every public item is documented (`#![deny(missing_docs)]`).

#![deny(missing_docs)]

pub mod collection;
pub mod error;
pub mod identity;
pub mod joke;

pub use collection::{Insertion, JokeCollection};
pub use error::ValidationError;
pub use identity::JokeId;
pub use joke::Joke;

/// Storage key under which the whole joke collection is persisted.
pub const STORAGE_KEY: &str = "chuckNorrisJokes";
