use axum::{response::IntoResponse, routing::get, Json, Router};
use http::StatusCode;
use serde_json::json;
use std::{error::Error, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt, Registry};

pub mod circuits;
pub mod race;
pub mod season;
pub mod standings;

use crate::{
    routes::{
        circuits::circuit_routes, race::race_routes, season::season_routes,
        standings::standings_routes,
    },
    store::DatasetStore,
    utils::{config::Config, state::AppState},
};

pub fn init_tracing(log_level: &str) {
    let level = match log_level {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::INFO,
    };

    let filter = filter::Targets::new()
        .with_target("tower_http::trace::on_response", Level::TRACE)
        .with_target("tower_http::trace::on_request", Level::TRACE)
        .with_target("tower_http::trace::make_span", Level::DEBUG)
        .with_target("axum::rejection", Level::TRACE)
        .with_target(env!("CARGO_CRATE_NAME"), level)
        .with_default(Level::INFO);

    let tracing_layer = tracing_subscriber::fmt::layer();

    Registry::default().with(tracing_layer).with(filter).init();
}

/// Loads the dataset and builds the router. The router only exists once the
/// dataset is fully loaded and checked, so no request can see a partial load.
pub async fn make_app(config: Config) -> Result<Router, Box<dyn Error>> {
    info!("Initializing application...");
    let store = DatasetStore::new(config.data_dir.clone());
    info!(data_dir = %store.root().display(), "Loading dataset");
    let dataset = tokio::task::spawn_blocking(move || store.load()).await??;
    info!("Dataset loaded successfully");

    let state = Arc::new(AppState::new(config, dataset));
    let app = app_router(state);
    info!("Application initialized successfully");

    Ok(app)
}

pub fn app_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health_check))
        .nest("/seasons", season_routes())
        .nest("/standings", standings_routes())
        .nest("/race", race_routes())
        .nest("/circuits", circuit_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"message": "ok"}))).into_response()
}
