//! Tournament result handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum_extra::extract::WithRejection;

use crate::dto::{ListParams, TournamentResultDto};
use crate::error::HttpError;
use crate::state::AppState;

/// List tournament results, optionally narrowed by `player` and `season`.
pub async fn list(
    State(state): State<AppState>,
    WithRejection(Query(params), _): WithRejection<Query<ListParams>, HttpError>,
) -> Result<Json<Vec<TournamentResultDto>>, HttpError> {
    let filter = params.to_filter()?;
    let results = state.core.results().list_results(&filter).await?;
    Ok(Json(results.into_iter().map(Into::into).collect()))
}

pub async fn get(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, HttpError>,
) -> Result<Json<TournamentResultDto>, HttpError> {
    Ok(Json(state.core.results().get_result(id).await?.into()))
}
