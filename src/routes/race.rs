use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{
    handlers::race::{lap_times, pit_stops, race_results, sprint_results, status_counts},
    utils::state::AppState,
};

pub fn race_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/{race_id}/results", get(race_results))
        .route("/{race_id}/laps/{driver_id}", get(lap_times))
        .route("/{race_id}/pit_stops", get(pit_stops))
        .route("/{race_id}/status", get(status_counts))
        .route("/{race_id}/sprint", get(sprint_results))
}
