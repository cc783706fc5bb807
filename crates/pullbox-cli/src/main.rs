//! # pbx — Pullbox CLI
//!
//! Minimal container runtime front-end: pulls an image's layered
//! filesystem from a registry and runs a command chrooted and
//! namespaced inside it, forwarding stdio and the exit code.

mod commands;

use clap::Parser;

use crate::commands::Cli;

const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

fn main() {
    // Logs go to stderr; stdout belongs to the in-container command.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match commands::execute(cli) {
        Ok(code) => std::process::exit(code),
        Err(error) => {
            eprintln!("{RED}{BOLD}error:{RESET} {error:#}");
            std::process::exit(pullbox_common::constants::FRONTEND_FAILURE_CODE);
        }
    }
}
