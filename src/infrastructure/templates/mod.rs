//! Server-side HTML rendering.
//!
//! Provides [`AskamaRenderer`], the production [`crate::domain::renderer::DisclaimerRenderer`].

mod askama_renderer;

pub use askama_renderer::{AskamaRenderer, DisclaimerTemplate};
