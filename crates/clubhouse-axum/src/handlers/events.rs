//! Event handlers - the club calendar and its tournaments.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum_extra::extract::WithRejection;
use serde::Deserialize;

use crate::dto::{EventDto, TournamentDto};
use crate::error::HttpError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct EventQuery {
    pub season: Option<String>,
}

/// List events, optionally for one season.
pub async fn list(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<EventQuery>, HttpError>,
) -> Result<Json<Vec<EventDto>>, HttpError> {
    let season = match query.season.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(raw.parse::<i32>().map_err(|_| {
            HttpError::BadRequest(format!("season: '{raw}' is not a valid integer"))
        })?),
    };
    let events = state.core.events().list_events(season).await?;
    Ok(Json(events.iter().map(EventDto::from).collect()))
}

pub async fn get(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, HttpError>,
) -> Result<Json<EventDto>, HttpError> {
    Ok(Json(EventDto::from(&state.core.events().get_event(id).await?)))
}

/// Tournaments played during an event.
pub async fn tournaments(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, HttpError>,
) -> Result<Json<Vec<TournamentDto>>, HttpError> {
    let tournaments = state.core.events().list_tournaments(id).await?;
    Ok(Json(tournaments.iter().map(TournamentDto::from).collect()))
}
