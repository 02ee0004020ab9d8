//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// Returns service liveness and version.
///
/// # Endpoint
///
/// `GET /health`
///
/// The gate has no external dependencies, so a running process is a healthy one.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "disclaimer_enabled": true
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        disclaimer_enabled: state.config.disclaimer_enabled,
    })
}
