//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Order extensions by their declared tags, dependencies and position hints
#[derive(Parser, Debug)]
#[command(name = "extorder")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Manifests to load, registered in argument order
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ManifestArgs {
    /// Extension manifest files (TOML with [[extension]] tables)
    #[arg(required = true)]
    pub manifests: Vec<PathBuf>,

    /// Let the most recently registered provider of a tag win instead of
    /// failing on ambiguous providers
    #[arg(long, env = "EXTORDER_LENIENT")]
    pub lenient: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the resolved execution order
    ///
    /// Examples:
    ///   extorder order core.toml plugins.toml
    ///   extorder order --json extensions.toml
    Order {
        #[command(flatten)]
        input: ManifestArgs,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Verify that the extensions can be ordered
    Check {
        #[command(flatten)]
        input: ManifestArgs,
    },
}
