//! Results report command.

use anyhow::Result;
use clubhouse_core::ResultFilter;

use crate::bootstrap::CliContext;
use crate::presentation::{format_optional, print_separator, truncate_string};

const TABLE_WIDTH: usize = 78;

/// Print results (or points) matching the optional player/season filters.
pub async fn execute(
    ctx: &CliContext,
    player: Option<i64>,
    season: Option<i32>,
    points: bool,
) -> Result<()> {
    let filter = ResultFilter { player, season };

    if points {
        let rows = ctx.app().results().list_points(&filter).await?;
        println!(
            "{:<6} {:<30} {:<8} {:>8} {:>6} {:>8}",
            "ID", "Tournament", "Player", "Position", "Score", "Points"
        );
        print_separator(TABLE_WIDTH);
        for row in &rows {
            println!(
                "{:<6} {:<30} {:<8} {:>8} {:>6} {:>8}",
                row.id,
                truncate_string(&row.tournament.name, 30),
                row.player_id,
                row.position,
                format_optional(&row.score, "-"),
                row.points
            );
        }
        println!("{} row(s)", rows.len());
    } else {
        let rows = ctx.app().results().list_results(&filter).await?;
        println!(
            "{:<6} {:<30} {:<8} {:>8} {:>6} {:>10}",
            "ID", "Tournament", "Player", "Position", "Score", "Amount"
        );
        print_separator(TABLE_WIDTH);
        for row in &rows {
            println!(
                "{:<6} {:<30} {:<8} {:>8} {:>6} {:>10}",
                row.id,
                truncate_string(&row.tournament.name, 30),
                row.player_id,
                row.position,
                format_optional(&row.score, "-"),
                row.amount
            );
        }
        println!("{} row(s)", rows.len());
    }
    Ok(())
}
