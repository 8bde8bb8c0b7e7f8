//! # Fetch Subcommand
//!
//! Runs fetch-and-add one or more times, then prints the list. A failed
//! fetch shows the connection alert on stderr and leaves the saved jokes
//! untouched.

use std::io::Write;

use anyhow::Context;
use clap::Args;

use chuck_app::{AppContext, JokeController};

use crate::{alert_for, print_view};

/// Arguments for `chuck fetch`.
#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Number of new jokes to add.
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: u32,
}

impl Default for FetchArgs {
    fn default() -> Self {
        Self { count: 1 }
    }
}

/// Execute the fetch subcommand.
///
/// Stops at the first failure. Jokes added before it stay saved.
pub async fn run_fetch(
    args: &FetchArgs,
    ctx: AppContext,
    out: &mut impl Write,
) -> anyhow::Result<u8> {
    let controller = JokeController::start(ctx);
    let mut code = 0;

    for n in 1..=args.count {
        match controller.fetch_and_add().await {
            Ok(outcome) => {
                tracing::debug!(
                    id = %outcome.joke.id,
                    attempts = outcome.attempts,
                    "fetch {n}/{} added a joke",
                    args.count
                );
            }
            Err(e) => match alert_for(&e) {
                Some(alert) => {
                    eprintln!("{alert}");
                    code = 1;
                    break;
                }
                None => return Err(e).context("fetch-and-add failed"),
            },
        }
    }

    print_view(out, &controller.view())?;
    Ok(code)
}
