//! Paths command handler.
//!
//! Displays resolved paths for diagnosing where data lives.

use anyhow::Result;

use clubhouse_core::paths::{DATA_DIR_ENV, data_root};

use crate::bootstrap::CliConfig;

/// Print the data root and database file in `key = value` format.
pub fn execute(config: &CliConfig) -> Result<()> {
    let override_note = std::env::var(DATA_DIR_ENV)
        .map(|_| format!(" (from {DATA_DIR_ENV})"))
        .unwrap_or_default();

    println!("data_root = {}{override_note}", data_root()?.display());
    println!("database = {}", config.resolve_database_path()?.display());
    Ok(())
}
