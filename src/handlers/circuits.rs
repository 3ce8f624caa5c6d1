use std::sync::Arc;

use crate::{models::error::Error, utils::state::AppState};
use axum::{extract::State, response::IntoResponse, Json};
use http::StatusCode;

pub async fn circuit_locations(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, Error> {
    let body = state.cached("circuits".to_string(), |engine| engine.circuit_locations())?;
    Ok((StatusCode::OK, Json(body)))
}

/// All-time races per country.
pub async fn races_by_country(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, Error> {
    let body = state.cached("races_by_country:all".to_string(), |engine| {
        engine.race_counts_by_country(None)
    })?;
    Ok((StatusCode::OK, Json(body)))
}
