use std::sync::Arc;

use crate::{
    models::{error::Error, Year},
    utils::state::AppState,
};
use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::IntoResponse,
    Json,
};
use http::StatusCode;

pub async fn driver_standings(
    State(state): State<Arc<AppState>>,
    season: Result<Path<Year>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(season) = season?;
    let body = state.cached(format!("driver_standings:{season}"), |engine| {
        engine.driver_standings(season)
    })?;
    Ok((StatusCode::OK, Json(body)))
}

pub async fn constructor_standings(
    State(state): State<Arc<AppState>>,
    season: Result<Path<Year>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(season) = season?;
    let body = state.cached(format!("constructor_standings:{season}"), |engine| {
        engine.constructor_standings(season)
    })?;
    Ok((StatusCode::OK, Json(body)))
}
