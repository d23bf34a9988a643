//! Player handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum_extra::extract::WithRejection;

use crate::dto::PlayerDto;
use crate::error::HttpError;
use crate::state::AppState;

pub async fn get(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, HttpError>,
) -> Result<Json<PlayerDto>, HttpError> {
    Ok(Json(state.core.players().get(id).await?.into()))
}
