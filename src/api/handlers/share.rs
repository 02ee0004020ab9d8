//! Handler for building sharing links.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::share::{ShareQuery, ShareResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::target_url::parse_target_url;

/// Returns Facebook, Twitter/X and WhatsApp sharing links for a found item.
///
/// # Endpoint
///
/// `GET /api/share?url=<item permalink>&title=<item title>`
///
/// When the disclaimer is enabled every link points at the gate, otherwise
/// at the service directly.
///
/// # Response
///
/// ```json
/// {
///   "disclaimer_enabled": true,
///   "links": {
///     "facebook": "https://fundgrube.example/fundgrube/redirect/?url=...&service=facebook&title=...",
///     "twitter": "...",
///     "whatsapp": "..."
///   }
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request with a JSON error body if `url` is missing or not an
/// absolute HTTP(S) URL, or the title is too long.
pub async fn share_handler(
    State(state): State<AppState>,
    query: Result<Query<ShareQuery>, QueryRejection>,
) -> Result<Json<ShareResponse>, AppError> {
    let Query(query) = query?;
    query.validate()?;

    let item_url = parse_target_url(&query.url)
        .map_err(|e| AppError::bad_request(e.to_string(), json!({ "field": "url" })))?;

    let links = state
        .link_builder
        .build_sharing_urls(item_url.as_str(), query.title.trim());

    Ok(Json(ShareResponse {
        disclaimer_enabled: state.link_builder.disclaimer_enabled(),
        links,
    }))
}
