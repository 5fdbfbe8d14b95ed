//! Extension ordering CLI
//!
//! Loads extension manifests and prints the order the extensions must run in.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    match cli.command {
        Commands::Order { input, json } => {
            commands::run_order(&input.manifests, input.lenient, json)
        }
        Commands::Check { input } => commands::run_check(&input.manifests, input.lenient),
    }
}

/// Log to stderr at DEBUG with `--verbose`, otherwise only when `RUST_LOG`
/// is set.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => return,
        }
    };

    let initialized = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
    if initialized.is_ok() && verbose {
        tracing::debug!("Verbose mode enabled");
    }
}
