//! # List Subcommand
//!
//! Prints the saved jokes, newest first. This is the startup render on its
//! own; it never touches the network.

use std::io::Write;

use clap::Args;

use chuck_app::{AppContext, JokeController};

use crate::print_view;

/// Arguments for `chuck list`.
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Print only the joke ids, one per line.
    #[arg(long)]
    pub ids: bool,
}

/// Execute the list subcommand.
pub fn run_list(args: &ListArgs, ctx: AppContext, out: &mut impl Write) -> anyhow::Result<u8> {
    let controller = JokeController::start(ctx);
    if args.ids {
        for joke in controller.jokes().iter() {
            writeln!(out, "{}", joke.id)?;
        }
        out.flush()?;
    } else {
        print_view(out, &controller.view())?;
    }
    Ok(0)
}
