//! Event, tournament and player DTOs.

use chrono::NaiveDate;
use clubhouse_core::{Event, Player, Tournament};
use serde::Serialize;

/// Tournament as nested inside result and points rows.
#[derive(Debug, Clone, Serialize)]
pub struct TournamentDto {
    pub id: i64,
    pub event: i64,
    pub round: i64,
    pub name: String,
    pub format: Option<String>,
    pub is_net: bool,
    pub gg_id: String,
}

impl From<&Tournament> for TournamentDto {
    fn from(t: &Tournament) -> Self {
        Self {
            id: t.id,
            event: t.event_id,
            round: t.round_id,
            name: t.name.clone(),
            format: t.format.clone(),
            is_net: t.is_net,
            gg_id: t.gg_id.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EventDto {
    pub id: i64,
    pub event_type: &'static str,
    pub name: String,
    pub season: i32,
    pub start_date: NaiveDate,
    pub status: &'static str,
    pub rounds: Option<i32>,
    pub gg_id: Option<String>,
}

impl From<&Event> for EventDto {
    fn from(e: &Event) -> Self {
        Self {
            id: e.id,
            event_type: e.event_type.as_str(),
            name: e.name.clone(),
            season: e.season,
            start_date: e.start_date,
            status: e.status.as_str(),
            rounds: e.rounds,
            gg_id: e.gg_id.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerDto {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub ghin: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub phone_number: Option<String>,
    pub tee: String,
    pub is_member: bool,
    pub last_season: Option<i32>,
}

impl From<Player> for PlayerDto {
    fn from(p: Player) -> Self {
        Self {
            id: p.id,
            first_name: p.first_name,
            last_name: p.last_name,
            email: p.email,
            ghin: p.ghin,
            birth_date: p.birth_date,
            phone_number: p.phone_number,
            tee: p.tee,
            is_member: p.is_member,
            last_season: p.last_season,
        }
    }
}
