//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub disclaimer_enabled: bool,
}
