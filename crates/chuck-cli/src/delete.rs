//! # Delete Subcommand
//!
//! Removes one saved joke by id, then prints the list. An id that is not
//! saved is reported on stderr and is not an error.

use std::io::Write;

use anyhow::Context;
use clap::Args;

use chuck_app::{AppContext, DeleteOutcome, JokeController};
use chuck_core::JokeId;

use crate::print_view;

/// Arguments for `chuck delete`.
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Id of the joke to remove, as shown by `chuck list`.
    pub id: String,
}

/// Execute the delete subcommand.
pub fn run_delete(args: &DeleteArgs, ctx: AppContext, out: &mut impl Write) -> anyhow::Result<u8> {
    let id = JokeId::new(&args.id).context("invalid joke id")?;
    let controller = JokeController::start(ctx);
    delete_and_report(&controller, &id)?;
    print_view(out, &controller.view())?;
    Ok(0)
}

/// Delete `id` and note on stderr when nothing matched.
pub(crate) fn delete_and_report(controller: &JokeController, id: &JokeId) -> anyhow::Result<()> {
    match controller.delete(id).context("delete failed")? {
        DeleteOutcome::Removed(_) => {}
        DeleteOutcome::NotFound => eprintln!("No saved joke with id {id}."),
    }
    Ok(())
}
