//! Public route configuration.

use crate::api::handlers::{gate_handler, health_handler, share_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Routes subject to rate limiting.
///
/// # Endpoints
///
/// - `GET {gate_route}` - Redirect gate (e.g. `/fundgrube/redirect`)
/// - `GET /api/share`   - Sharing links for an item
pub fn gate_routes(gate_route: &str) -> Router<AppState> {
    Router::new()
        .route(gate_route, get(gate_handler))
        .route("/api/share", get(share_handler))
}

/// Operational routes, not rate limited.
///
/// # Endpoints
///
/// - `GET /health` - Liveness and version
pub fn service_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_handler))
}
