//! # chuck CLI entry point
//!
//! Parses command-line arguments, resolves configuration, and dispatches
//! to subcommand handlers.

use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use chuck_cli::config::{CliConfig, GlobalArgs};
use chuck_cli::delete::{run_delete, DeleteArgs};
use chuck_cli::fetch::{run_fetch, FetchArgs};
use chuck_cli::list::{run_list, ListArgs};
use chuck_cli::shell::{run_shell, ShellArgs};

/// Fetch Chuck Norris jokes and keep a local list of them.
///
/// Jokes are saved newest first, without duplicates, and survive between
/// runs.
#[derive(Parser, Debug)]
#[command(name = "chuck", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(flatten)]
    global: GlobalArgs,

    /// Defaults to `list`.
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the saved jokes, newest first.
    List(ListArgs),

    /// Fetch a random joke and add it to the top of the list.
    Fetch(FetchArgs),

    /// Remove a saved joke by id.
    Delete(DeleteArgs),

    /// Interactive session: fetch, delete, and list without restarting.
    Shell(ShellArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("chuck CLI v{} starting", env!("CARGO_PKG_VERSION"));

    match run(cli).await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<u8> {
    let ctx = CliConfig::resolve(&cli.global)
        .context("invalid configuration")?
        .into_context()?;

    let mut out = std::io::stdout().lock();
    match cli.command.unwrap_or(Commands::List(ListArgs::default())) {
        Commands::List(args) => run_list(&args, ctx, &mut out),
        Commands::Fetch(args) => run_fetch(&args, ctx, &mut out).await,
        Commands::Delete(args) => run_delete(&args, ctx, &mut out),
        Commands::Shell(args) => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            run_shell(&args, ctx, stdin, &mut out).await
        }
    }
}
