//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`templates`] - Askama page rendering

pub mod templates;
