//! Per-player tournament outcomes: payouts and season points.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::event::Tournament;
use super::money::Money;

/// Optional equality filters shared by the results and points listings.
///
/// Unset fields do not constrain the query; set fields are intersected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResultFilter {
    /// Exact player id.
    pub player: Option<i64>,
    /// Season of the tournament's event.
    pub season: Option<i32>,
}

impl ResultFilter {
    /// Filter that matches every row.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            player: None,
            season: None,
        }
    }

    #[must_use]
    pub const fn for_player(mut self, player: i64) -> Self {
        self.player = Some(player);
        self
    }

    #[must_use]
    pub const fn for_season(mut self, season: i32) -> Self {
        self.season = Some(season);
        self
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.player.is_none() && self.season.is_none()
    }
}

/// A player's placing (and any payout) in a tournament.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentResult {
    pub id: i64,
    pub tournament: Tournament,
    pub player_id: i64,
    pub team_id: Option<String>,
    pub position: i32,
    pub score: Option<i32>,
    pub amount: Money,
    pub payout_type: Option<String>,
    pub payout_to: Option<String>,
    pub payout_status: Option<String>,
    pub flight: Option<String>,
    pub summary: Option<String>,
    pub details: Option<String>,
    pub create_date: Option<NaiveDateTime>,
    pub payout_date: Option<NaiveDateTime>,
}

/// Data for recording a tournament result.
#[derive(Debug, Clone, Default)]
pub struct NewTournamentResult {
    pub tournament_id: i64,
    pub player_id: i64,
    pub team_id: Option<String>,
    pub position: i32,
    pub score: Option<i32>,
    pub amount: Money,
    pub payout_type: Option<String>,
    pub payout_to: Option<String>,
    pub payout_status: Option<String>,
    pub flight: Option<String>,
    pub summary: Option<String>,
    pub details: Option<String>,
}

/// Season-long points earned by a player in a tournament.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentPoints {
    pub id: i64,
    pub tournament: Tournament,
    pub player_id: i64,
    pub position: i32,
    pub score: Option<i32>,
    pub points: i32,
    pub details: Option<String>,
    pub create_date: NaiveDateTime,
}

/// Data for recording tournament points.
#[derive(Debug, Clone, Default)]
pub struct NewTournamentPoints {
    pub tournament_id: i64,
    pub player_id: i64,
    pub position: i32,
    pub score: Option<i32>,
    pub points: i32,
    pub details: Option<String>,
}
