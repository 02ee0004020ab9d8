//! HTTP request handlers for public endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod redirect;
pub mod share;

pub use health::health_handler;
pub use redirect::gate_handler;
pub use share::share_handler;
