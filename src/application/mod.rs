//! Application layer services implementing the gate's business logic.
//!
//! Services are plain values built once from configuration and shared through
//! [`crate::state::AppState`]. Neither keeps mutable state between requests.
//!
//! # Available Services
//!
//! - [`services::redirect_gate::RedirectGate`] - Validation of gate requests
//! - [`services::link_builder::LinkBuilder`] - Gate and sharing URL construction

pub mod services;
