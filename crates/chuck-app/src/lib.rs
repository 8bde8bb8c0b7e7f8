//! # chuck-app: Application Layer
//!
//! Wires the fetcher (`chuck-client`), the repository (`chuck-store`), and
//! the list view into the three user actions: startup, fetch-and-add, and
//! delete.
//!
//! ## Crate Policy
//!
//! - No global state. Everything comes in through [`AppContext`].
//! - No terminal I/O. The view is a model; front ends print it.

pub mod context;
pub mod controller;
pub mod error;
pub mod view;

pub use context::{AppContext, DEFAULT_MAX_FETCH_ATTEMPTS};
pub use controller::{DeleteOutcome, FetchOutcome, JokeController};
pub use error::ControllerError;
pub use view::{DeleteControl, JokeList, ListItem, PLACEHOLDER_TEXT};
