//! # Interactive Shell
//!
//! Keeps one controller alive for a session and reads commands line by
//! line. Every action starts from the saved list, so jokes added or removed
//! by other `chuck` runs meanwhile are kept.
//!
//! ```text
//! > fetch
//! > delete Hk2vQbAbQzOA6cvu3cV4zA
//! > quit
//! ```

use std::io::Write;

use anyhow::Context;
use clap::Args;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use chuck_app::{AppContext, JokeController};
use chuck_core::JokeId;

use crate::delete::delete_and_report;
use crate::{alert_for, print_view};

const HELP: &str = "\
Commands:
  fetch, f          add a new joke
  delete, d <id>    remove the joke with that id
  list, l           show the saved jokes
  help, h           show this help
  quit, q           leave the shell
";

/// Arguments for `chuck shell`.
#[derive(Args, Debug, Default)]
pub struct ShellArgs {
    /// Do not print the `> ` prompt (for piped input).
    #[arg(long)]
    pub no_prompt: bool,
}

/// One parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Fetch,
    Delete(JokeId),
    List,
    Help,
    Quit,
    Empty,
}

/// Parse one input line.
pub fn parse_line(line: &str) -> Result<ShellCommand, String> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(ShellCommand::Empty);
    };
    let command = match verb {
        "fetch" | "f" => ShellCommand::Fetch,
        "list" | "l" => ShellCommand::List,
        "help" | "h" | "?" => ShellCommand::Help,
        "quit" | "q" | "exit" => ShellCommand::Quit,
        "delete" | "d" => {
            let raw = words.next().ok_or("usage: delete <id>")?;
            let id = JokeId::new(raw).map_err(|e| e.to_string())?;
            ShellCommand::Delete(id)
        }
        other => return Err(format!("unknown command {other:?}; type \"help\"")),
    };
    match words.next() {
        Some(extra) => Err(format!("unexpected argument {extra:?}")),
        None => Ok(command),
    }
}

/// Execute the interactive shell until `quit` or end of input.
///
/// Failed fetches print the alert and the session continues. Storage
/// failures end the session with an error.
pub async fn run_shell<R>(
    args: &ShellArgs,
    ctx: AppContext,
    input: R,
    out: &mut impl Write,
) -> anyhow::Result<u8>
where
    R: AsyncBufRead + Unpin,
{
    let controller = JokeController::start(ctx);
    print_view(out, &controller.view())?;

    let mut lines = input.lines();
    loop {
        if !args.no_prompt {
            write!(out, "> ")?;
            out.flush()?;
        }
        let Some(line) = lines.next_line().await.context("failed to read input")? else {
            break;
        };

        match parse_line(&line) {
            Ok(ShellCommand::Empty) => {}
            Ok(ShellCommand::Quit) => break,
            Ok(ShellCommand::Help) => write!(out, "{HELP}")?,
            Ok(ShellCommand::List) => print_view(out, &controller.refresh())?,
            Ok(ShellCommand::Fetch) => {
                if let Err(e) = controller.fetch_and_add().await {
                    match alert_for(&e) {
                        Some(alert) => eprintln!("{alert}"),
                        None => return Err(e).context("fetch-and-add failed"),
                    }
                }
                print_view(out, &controller.view())?;
            }
            Ok(ShellCommand::Delete(id)) => {
                delete_and_report(&controller, &id)?;
                print_view(out, &controller.view())?;
            }
            Err(msg) => eprintln!("{msg}"),
        }
    }

    tracing::debug!(saved = controller.jokes().len(), "shell session ended");
    Ok(0)
}
