//! Gate request values: decoded query, validated request and the resulting decision.

use super::service::{ServiceId, ServiceProfile};
use url::form_urlencoded;

/// Query parameters of a gate request after a single form-decoding pass.
///
/// Missing parameters decode to empty strings so that every malformed request
/// reaches validation and is rejected the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GateQuery {
    pub url: String,
    pub service: String,
    pub title: Option<String>,
}

impl GateQuery {
    /// Decodes a raw query string (without the leading `?`).
    ///
    /// Each value is percent-decoded exactly once. A value that still contains
    /// escapes afterwards (e.g. `%253A` → `%3A`) is kept verbatim. When a
    /// parameter repeats, the first occurrence wins.
    pub fn parse(raw: &str) -> Self {
        let mut query = GateQuery::default();
        let mut seen_url = false;
        let mut seen_service = false;

        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            match key.as_ref() {
                "url" if !seen_url => {
                    query.url = value.into_owned();
                    seen_url = true;
                }
                "service" if !seen_service => {
                    query.service = value.into_owned();
                    seen_service = true;
                }
                "title" if query.title.is_none() => {
                    query.title = Some(value.into_owned());
                }
                _ => {}
            }
        }

        query
    }
}

/// A gate request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectRequest {
    /// Serialized form of the parsed target URL; this is what gets displayed and navigated to.
    pub target_url: String,
    pub service: ServiceId,
    pub title: Option<String>,
}

/// Why a gate request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("target URL is missing or not an absolute http(s) URL")]
    MalformedUrl,

    #[error("service is not supported")]
    UnknownService,

    #[error("target host is not whitelisted for the service")]
    DomainNotAllowed,
}

impl Rejection {
    /// Stable label for logs and metrics.
    pub fn as_str(self) -> &'static str {
        match self {
            Rejection::MalformedUrl => "malformed_url",
            Rejection::UnknownService => "unknown_service",
            Rejection::DomainNotAllowed => "domain_not_allowed",
        }
    }
}

/// Outcome of running a [`GateQuery`] through the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectDecision {
    Accepted(RedirectRequest),
    Rejected(Rejection),
}

impl RedirectDecision {
    pub fn is_accepted(&self) -> bool {
        matches!(self, RedirectDecision::Accepted(_))
    }

    /// Profile of the accepted service, `None` for rejections.
    pub fn profile(&self) -> Option<&'static ServiceProfile> {
        match self {
            RedirectDecision::Accepted(request) => Some(request.service.profile()),
            RedirectDecision::Rejected(_) => None,
        }
    }
}
