//! Browser UI and HTTP API for the pennyscan screener.
//!
//! The server is a thin trigger layer over `pennyscan-core`: every
//! `/api/screen` request builds a fresh criteria struct and re-runs the
//! whole fetch-compute-filter pass. The only shared state is the history
//! source handle.

pub mod routes;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

pub use routes::AppState;

/// Build the service router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/api/screen", get(routes::run_screen))
        .route("/api/periods", get(routes::periods))
        .route("/api/health", get(routes::health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
