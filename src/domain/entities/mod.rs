//! Core value types of the share gate.
//!
//! Nothing here is persisted. Values are built per request and dropped once the
//! response is written.
//!
//! # Entity Types
//!
//! - [`ServiceId`] / [`ServiceProfile`] - Supported sharing services and their static data
//! - [`GateQuery`] - Decoded query parameters of a gate request
//! - [`RedirectRequest`] / [`RedirectDecision`] - Validation result
//! - [`DisclaimerPage`] - Render payload for accepted requests

pub mod disclaimer;
pub mod redirect_request;
pub mod service;

pub use disclaimer::{DisclaimerPage, SiteLinks};
pub use redirect_request::{GateQuery, RedirectDecision, RedirectRequest, Rejection};
pub use service::{ServiceId, ServiceProfile, UnknownServiceError};
