//! `clubhouse` command-line adapter.
//!
//! Runs the HTTP server and covers the admin chores around it: creating
//! users, issuing tokens, loading fixtures and printing result reports.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used only by the binary entry point.
use dotenvy as _;
use tracing_subscriber as _;

// Runtime for the async handlers is provided by the binary.
use tokio as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::{Commands, TokenCommand, UserCommand};
pub use error::CliError;
pub use parser::Cli;
