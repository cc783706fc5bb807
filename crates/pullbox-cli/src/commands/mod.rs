//! CLI command definitions and dispatch.

pub mod run;

use clap::{Parser, Subcommand};

/// Pullbox — minimal container runtime front-end.
#[derive(Parser, Debug)]
#[command(name = "pbx", version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Pull an image and run a command isolated inside it.
    Run(run::RunArgs),
}

/// Dispatches the parsed CLI command to its handler.
///
/// Returns the exit code to terminate the process with.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn execute(cli: Cli) -> anyhow::Result<i32> {
    match cli.command {
        Command::Run(args) => run::execute(args),
    }
}
