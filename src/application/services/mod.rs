//! Business logic services for the application layer.

pub mod link_builder;
pub mod redirect_gate;

pub use link_builder::LinkBuilder;
pub use redirect_gate::RedirectGate;
