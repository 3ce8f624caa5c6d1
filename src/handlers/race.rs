use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::IntoResponse,
    Json,
};
use http::StatusCode;

use crate::{
    models::{error::Error, DriverId, RaceId},
    utils::state::AppState,
};

pub async fn race_results(
    State(state): State<Arc<AppState>>,
    race_id: Result<Path<RaceId>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(race_id) = race_id?;
    let body = state.cached(format!("results:{race_id}"), |engine| {
        engine.race_results(race_id)
    })?;
    Ok((StatusCode::OK, Json(body)))
}

pub async fn lap_times(
    State(state): State<Arc<AppState>>,
    ids: Result<Path<(RaceId, DriverId)>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path((race_id, driver_id)) = ids?;
    let body = state.cached(format!("laps:{race_id}:{driver_id}"), |engine| {
        engine.lap_times(race_id, driver_id)
    })?;
    Ok((StatusCode::OK, Json(body)))
}

pub async fn pit_stops(
    State(state): State<Arc<AppState>>,
    race_id: Result<Path<RaceId>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(race_id) = race_id?;
    let body = state.cached(format!("pit_stops:{race_id}"), |engine| {
        engine.pit_stops(race_id)
    })?;
    Ok((StatusCode::OK, Json(body)))
}

pub async fn status_counts(
    State(state): State<Arc<AppState>>,
    race_id: Result<Path<RaceId>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(race_id) = race_id?;
    let body = state.cached(format!("status:{race_id}"), |engine| {
        engine.status_counts(race_id)
    })?;
    Ok((StatusCode::OK, Json(body)))
}

pub async fn sprint_results(
    State(state): State<Arc<AppState>>,
    race_id: Result<Path<RaceId>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(race_id) = race_id?;
    let body = state.cached(format!("sprint:{race_id}"), |engine| {
        engine.sprint_results(race_id)
    })?;
    Ok((StatusCode::OK, Json(body)))
}
