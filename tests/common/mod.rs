#![allow(dead_code)]

use axum::Router;
use fundgrube_gate::api::routes::{gate_routes, service_routes};
use fundgrube_gate::config::Config;
use fundgrube_gate::domain::entities::DisclaimerPage;
use fundgrube_gate::domain::renderer::{DisclaimerRenderer, RenderError};
use fundgrube_gate::state::AppState;
use std::sync::Arc;
use url::Url;

pub const SITE: &str = "https://fundgrube.example/";
pub const GATE_PATH: &str = "/fundgrube/redirect";

pub fn test_config() -> Config {
    Config {
        listen_addr: "127.0.0.1:0".to_string(),
        log_level: "debug".to_string(),
        log_format: "text".to_string(),
        site_url: Url::parse(SITE).unwrap(),
        site_name: "Fundgrube".to_string(),
        gate_path: "/fundgrube/redirect/".to_string(),
        disclaimer_enabled: true,
        countdown_seconds: 5,
        privacy_policy_url: "https://fundgrube.example/datenschutz/".to_string(),
        imprint_url: "https://fundgrube.example/impressum/".to_string(),
        behind_proxy: false,
        rate_limit_per_second: 2,
        rate_limit_burst: 100,
    }
}

pub fn create_test_state() -> AppState {
    AppState::from_config(test_config())
}

pub fn create_state_without_disclaimer() -> AppState {
    let mut config = test_config();
    config.disclaimer_enabled = false;
    AppState::from_config(config)
}

/// Routes without rate limiting, so tests need no `ConnectInfo`.
pub fn test_app(state: AppState) -> Router {
    gate_routes(&state.config.gate_route())
        .merge(service_routes())
        .with_state(state)
}

/// Renderer that always fails, for fail-closed checks.
pub struct FailingRenderer;

impl DisclaimerRenderer for FailingRenderer {
    fn render(&self, _page: &DisclaimerPage) -> Result<String, RenderError> {
        Err(RenderError::Template("template missing".to_string()))
    }
}

pub fn create_failing_state() -> AppState {
    AppState::new(Arc::new(test_config()), Arc::new(FailingRenderer))
}
