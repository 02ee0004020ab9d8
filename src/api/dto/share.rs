//! DTOs for the sharing links endpoint.

use crate::domain::entities::ServiceId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

/// Query of `GET /api/share`.
#[derive(Debug, Deserialize, Validate)]
pub struct ShareQuery {
    /// Permalink of the found item.
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    /// Item title, prefilled into the share text.
    #[serde(default)]
    #[validate(length(max = 200, message = "Title must be at most 200 characters"))]
    pub title: String,
}

/// Sharing links for every supported service.
#[derive(Debug, Serialize)]
pub struct ShareResponse {
    /// Whether the links lead through the disclaimer gate.
    pub disclaimer_enabled: bool,
    pub links: BTreeMap<ServiceId, String>,
}
