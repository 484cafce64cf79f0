//! Liveness and lifecycle status.

use axum::{extract::State, http::Uri, Json};
use serde::Serialize;
use tiobe_common::error::ApiError;

use crate::state::{Phase, SharedState};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub phase: Phase,
    pub version: &'static str,
}

/// GET /health
pub async fn health(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        phase: state.phase(),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Unknown paths under /api answer with a JSON 404 instead of the static fallback.
pub async fn api_not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no API route for {}", uri.path()))
}
