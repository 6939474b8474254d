//! HTTP API server

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

pub mod handlers;
pub mod state;

pub use state::AppState;

/// Route serving the production snapshot.
pub const DAILY_PRODUCTION_ROUTE: &str = "/DailyProduction";

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(DAILY_PRODUCTION_ROUTE, get(handlers::daily_production))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
