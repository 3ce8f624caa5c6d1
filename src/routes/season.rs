use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{
    handlers::season::{list_races, list_seasons, races_by_country, races_per_season},
    utils::state::AppState,
};

pub fn season_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_seasons))
        .route("/races_per_season", get(races_per_season))
        .route("/{season}/races", get(list_races))
        .route("/{season}/races_by_country", get(races_by_country))
}
