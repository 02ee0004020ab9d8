//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /fundgrube/redirect` - Redirect gate (path from `GATE_PATH`)
//! - `GET  /api/share`          - Sharing links for an item
//! - `GET  /health`             - Health check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on the gate and share endpoints
//! - **Path normalization** - Trailing slash handling, so `/fundgrube/redirect/` hits the gate

use crate::api::middleware::{rate_limit, tracing};
use crate::api::routes::{gate_routes, service_routes};
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let limited = gate_routes(&state.config.gate_route()).layer(rate_limit::layer(&state.config));

    let router = Router::new()
        .merge(limited)
        .merge(service_routes())
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
