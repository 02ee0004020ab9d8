//! HTTP layer for request/response handling.
//!
//! This layer translates HTTP requests into gate operations and formats
//! responses.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Rate limiting and tracing middleware
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
