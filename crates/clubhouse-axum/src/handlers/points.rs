//! Tournament points handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum_extra::extract::WithRejection;

use crate::dto::{ListParams, TournamentPointsDto};
use crate::error::HttpError;
use crate::state::AppState;

/// List season points, optionally narrowed by `player` and `season`.
pub async fn list(
    State(state): State<AppState>,
    WithRejection(Query(params), _): WithRejection<Query<ListParams>, HttpError>,
) -> Result<Json<Vec<TournamentPointsDto>>, HttpError> {
    let filter = params.to_filter()?;
    let points = state.core.results().list_points(&filter).await?;
    Ok(Json(points.into_iter().map(Into::into).collect()))
}

pub async fn get(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, HttpError>,
) -> Result<Json<TournamentPointsDto>, HttpError> {
    Ok(Json(state.core.results().get_points(id).await?.into()))
}
