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

pub async fn list_seasons(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, Error> {
    let body = state.cached("seasons".to_string(), |engine| engine.list_seasons())?;
    Ok((StatusCode::OK, Json(body)))
}

pub async fn list_races(
    State(state): State<Arc<AppState>>,
    season: Result<Path<Year>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(season) = season?;
    let body = state.cached(format!("races:{season}"), |engine| engine.list_races(season))?;
    Ok((StatusCode::OK, Json(body)))
}

pub async fn races_by_country(
    State(state): State<Arc<AppState>>,
    season: Result<Path<Year>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(season) = season?;
    let body = state.cached(format!("races_by_country:{season}"), |engine| {
        engine.races_by_country(season)
    })?;
    Ok((StatusCode::OK, Json(body)))
}

pub async fn races_per_season(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, Error> {
    let body = state.cached("races_per_season".to_string(), |engine| {
        engine.races_per_season()
    })?;
    Ok((StatusCode::OK, Json(body)))
}
