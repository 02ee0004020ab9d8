//! Shared application state injected into handlers.

use crate::application::services::{LinkBuilder, RedirectGate};
use crate::config::Config;
use crate::domain::renderer::DisclaimerRenderer;
use crate::infrastructure::templates::AskamaRenderer;
use std::sync::Arc;

/// Read-only state built once at startup.
///
/// Cloned per request by axum; every field is cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub gate: RedirectGate,
    pub link_builder: Arc<LinkBuilder>,
    pub renderer: Arc<dyn DisclaimerRenderer>,
}

impl AppState {
    /// Builds state with the given renderer.
    pub fn new(config: Arc<Config>, renderer: Arc<dyn DisclaimerRenderer>) -> Self {
        let link_builder = Arc::new(LinkBuilder::new(
            config.gate_base_url(),
            config.disclaimer_enabled,
        ));

        Self {
            config,
            gate: RedirectGate::new(),
            link_builder,
            renderer,
        }
    }

    /// Builds state with the production Askama renderer.
    pub fn from_config(config: Config) -> Self {
        Self::new(Arc::new(config), Arc::new(AskamaRenderer::new()))
    }
}
