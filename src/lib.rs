//! # Fundgrube Gate
//!
//! Privacy-compliant share gate for Fundgrube found-item listings, built with Axum.
//!
//! Outbound share links to Facebook, Twitter/X and WhatsApp go through an
//! interstitial disclaimer page instead of straight to the third party. The gate
//! only ever forwards to hosts on a fixed per-service whitelist; anything else
//! is answered with a redirect to the site home.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Services, gate requests and decisions, countdown
//! - **Application Layer** ([`application`]) - Gate validation and link building
//! - **Infrastructure Layer** ([`infrastructure`]) - Askama page rendering
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export SITE_URL="https://fundgrube.example/"
//! cargo run
//!
//! # Sharing links for an item
//! curl 'http://localhost:3000/api/share?url=https://fundgrube.example/fundstueck/42/&title=Rotes%20Fahrrad'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkBuilder, RedirectGate};
    pub use crate::config::Config;
    pub use crate::domain::entities::{
        GateQuery, RedirectDecision, RedirectRequest, Rejection, ServiceId, ServiceProfile,
    };
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
