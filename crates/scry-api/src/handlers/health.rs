//! Health check handler

use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub model_loaded: bool,
    pub model: String,
    pub version: String,
}

/// Liveness probe. Always reports healthy; the model-absent state is
/// visible in `model_loaded` but does not make the service unhealthy.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is alive", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        model_loaded: state.model_loaded(),
        model: state.model_id().to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
