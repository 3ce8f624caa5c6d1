use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{
    handlers::circuits::{circuit_locations, races_by_country},
    utils::state::AppState,
};

pub fn circuit_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(circuit_locations))
        .route("/by_country", get(races_by_country))
}
