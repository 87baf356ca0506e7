//! Health check endpoints

use axum::{extract::State, Json};
use reklamap_core::ledger::Ledger;

use crate::dto::HealthResponse;
use crate::state::AppState;

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
    })
}

/// Ready check endpoint (verifies database connectivity)
pub async fn ready_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let ready = match state.timeline.health_check().await {
        Ok(ok) => ok,
        Err(e) => {
            tracing::warn!(operation = "health_check", error = %e, "Database not reachable");
            false
        }
    };

    Json(HealthResponse {
        status: if ready { "ready" } else { "degraded" }.to_string(),
        version: state.version.clone(),
    })
}
