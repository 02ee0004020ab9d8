//! Domain layer containing the gate's value types and rules.
//!
//! Nothing in here knows about HTTP or templates.
//!
//! # Architecture
//!
//! - [`entities`] - Services, gate requests and decisions, render payload
//! - [`renderer`] - Page rendering trait implemented by the infrastructure layer
//! - [`countdown`] - Auto-redirect countdown and its async driver
//!
//! # Gate Flow
//!
//! 1. HTTP handler decodes the raw query into a [`entities::GateQuery`]
//! 2. [`crate::application::services::RedirectGate`] validates it
//! 3. An accepted decision becomes a [`entities::DisclaimerPage`]
//! 4. A [`renderer::DisclaimerRenderer`] turns the page into HTML

pub mod countdown;
pub mod entities;
pub mod renderer;
