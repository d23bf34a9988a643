//! Main CLI parser and top-level argument handling.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Golf club tournament results service.
#[derive(Parser)]
#[command(name = "clubhouse")]
#[command(about = "Serve and administer golf club tournament results")]
#[command(version)]
pub struct Cli {
    /// SQLite database file (defaults to the platform data directory)
    #[arg(long = "database", env = "CLUBHOUSE_DATABASE", global = true)]
    pub database: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
