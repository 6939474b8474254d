//! API handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::api::AppState;
use crate::types::ProductionRecord;

/// Health check reporting the size of the loaded snapshot
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        records: state.len(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub records: usize,
}

/// Every production record loaded at startup, in file order
pub async fn daily_production(
    State(state): State<AppState>,
) -> Json<Arc<Vec<ProductionRecord>>> {
    Json(state.records())
}
