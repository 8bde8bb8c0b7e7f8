//! # chuck-cli: Command-Line Front End
//!
//! Provides the `chuck` binary. Each subcommand is one user action on the
//! stored joke list, followed by a print of the re-rendered list:
//!
//! ```bash
//! chuck              # same as `chuck list`
//! chuck list
//! chuck fetch --count 3
//! chuck delete Hk2vQbAbQzOA6cvu3cV4zA
//! chuck shell        # interactive: fetch / delete <id> / list / quit
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing and printing only. Actions delegate to
//!   [`chuck_app::JokeController`].
//! - The rendered list goes to the given writer (stdout in the binary);
//!   alerts go to stderr; diagnostics go through `tracing` to stderr.

pub mod config;
pub mod delete;
pub mod fetch;
pub mod list;
pub mod shell;

#[cfg(test)]
pub(crate) mod test_support;

use std::io::Write;

use chuck_app::{ControllerError, JokeList};

/// Alert shown when a joke cannot be fetched.
pub const FETCH_ALERT: &str = "Could not fetch a joke. Check your connection or the API URL.";

/// User-facing message for a failed action, or `None` when the failure is
/// not something the user can act on (it is reported as an error instead).
pub fn alert_for(err: &ControllerError) -> Option<String> {
    match err {
        ControllerError::Fetch(_) => Some(FETCH_ALERT.to_string()),
        ControllerError::DuplicatesExhausted { attempts } => Some(format!(
            "No new joke after {attempts} tries: every joke fetched was already saved."
        )),
        ControllerError::Storage(_) => None,
    }
}

/// Print the rendered list.
pub fn print_view(out: &mut impl Write, view: &JokeList) -> std::io::Result<()> {
    write!(out, "{view}")?;
    out.flush()
}
