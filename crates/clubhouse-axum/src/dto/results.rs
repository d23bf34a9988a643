//! Tournament result and points DTOs, plus the shared listing query.

use chrono::NaiveDateTime;
use clubhouse_core::{Money, ResultFilter, TournamentPoints, TournamentResult};
use serde::{Deserialize, Serialize};

use super::events::TournamentDto;
use crate::error::HttpError;

/// Raw `?player=&season=` query.
///
/// Values are kept as strings so that empty values can be treated as
/// absent and malformed ones reported with a JSON error body.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub player: Option<String>,
    pub season: Option<String>,
}

impl ListParams {
    pub fn to_filter(&self) -> Result<ResultFilter, HttpError> {
        Ok(ResultFilter {
            player: parse_param("player", self.player.as_deref())?,
            season: parse_param("season", self.season.as_deref())?,
        })
    }
}

fn parse_param<T: std::str::FromStr>(
    name: &str,
    value: Option<&str>,
) -> Result<Option<T>, HttpError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| HttpError::BadRequest(format!("{name}: '{raw}' is not a valid integer"))),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TournamentResultDto {
    pub id: i64,
    pub tournament: TournamentDto,
    pub player: i64,
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

impl From<TournamentResult> for TournamentResultDto {
    fn from(r: TournamentResult) -> Self {
        Self {
            id: r.id,
            tournament: TournamentDto::from(&r.tournament),
            player: r.player_id,
            team_id: r.team_id,
            position: r.position,
            score: r.score,
            amount: r.amount,
            payout_type: r.payout_type,
            payout_to: r.payout_to,
            payout_status: r.payout_status,
            flight: r.flight,
            summary: r.summary,
            details: r.details,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TournamentPointsDto {
    pub id: i64,
    pub tournament: TournamentDto,
    pub player: i64,
    pub position: i32,
    pub score: Option<i32>,
    pub points: i32,
    pub details: Option<String>,
    pub create_date: NaiveDateTime,
}

impl From<TournamentPoints> for TournamentPointsDto {
    fn from(p: TournamentPoints) -> Self {
        Self {
            id: p.id,
            tournament: TournamentDto::from(&p.tournament),
            player: p.player_id,
            position: p.position,
            score: p.score,
            points: p.points,
            details: p.details,
            create_date: p.create_date,
        }
    }
}
