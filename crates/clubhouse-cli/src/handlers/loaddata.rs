//! Fixture loading command.

use std::path::Path;

use anyhow::Result;
use clubhouse_db::load_fixture_file;

use crate::bootstrap::CliContext;

/// Load a JSON fixture file into the database and report per-model counts.
pub async fn execute(ctx: &CliContext, file: &Path) -> Result<()> {
    let summary = load_fixture_file(&ctx.pool, file).await?;

    for (model, count) in &summary.models {
        println!("  {model:<28} {count:>6}");
    }
    println!(
        "Installed {} object(s) from {}",
        summary.total(),
        file.display()
    );
    Ok(())
}
