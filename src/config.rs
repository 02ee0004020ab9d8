//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, validated, and then shared read-only
//! through [`crate::state::AppState`]. Nothing reads the environment after that.
//!
//! ## Required Variables
//!
//! - `SITE_URL` - Public base URL of the site, e.g. `https://fundgrube.example/`.
//!   Used as the fail-closed redirect target and as the base of gate URLs.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `SITE_NAME` - Site name shown on the disclaimer page (default: `Fundgrube`)
//! - `GATE_PATH` - Path of the gate endpoint (default: `/fundgrube/redirect/`)
//! - `DISCLAIMER_ENABLED` - Route sharing links through the gate (default: `true`)
//! - `COUNTDOWN_SECONDS` - Auto-redirect delay, 1 to 60 (default: `5`)
//! - `PRIVACY_POLICY_URL` - Site privacy page (default: `<SITE_URL>/datenschutz/`)
//! - `IMPRINT_URL` - Site imprint page (default: `<SITE_URL>/impressum/`)
//! - `BEHIND_PROXY` - Read client IP from forwarding headers for rate limiting (default: `false`)
//! - `RATE_LIMIT_PER_SECOND` / `RATE_LIMIT_BURST` - Public rate limit (default: `2` / `100`)

use crate::domain::countdown::DEFAULT_COUNTDOWN_SECONDS;
use crate::domain::entities::SiteLinks;
use anyhow::{Context, Result};
use std::env;
use url::Url;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub site_url: Url,
    pub site_name: String,
    /// Path the gate is served under. Always starts with `/`.
    pub gate_path: String,
    pub disclaimer_enabled: bool,
    pub countdown_seconds: u32,
    pub privacy_policy_url: String,
    pub imprint_url: String,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `SITE_URL` is missing or not a valid URL.
    pub fn from_env() -> Result<Self> {
        let site_url = env::var("SITE_URL").context("SITE_URL must be set")?;
        let site_url =
            Url::parse(&site_url).with_context(|| format!("SITE_URL is not a valid URL: '{site_url}'"))?;

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
        let site_name = env::var("SITE_NAME").unwrap_or_else(|_| "Fundgrube".to_string());

        let gate_path = normalize_gate_path(
            &env::var("GATE_PATH").unwrap_or_else(|_| "/fundgrube/redirect/".to_string()),
        );

        let disclaimer_enabled = env::var("DISCLAIMER_ENABLED")
            .map(|v| parse_bool(&v))
            .unwrap_or(true);

        let countdown_seconds = env::var("COUNTDOWN_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_COUNTDOWN_SECONDS);

        let privacy_policy_url = env::var("PRIVACY_POLICY_URL")
            .unwrap_or_else(|_| site_page(&site_url, "datenschutz/"));

        let imprint_url =
            env::var("IMPRINT_URL").unwrap_or_else(|_| site_page(&site_url, "impressum/"));

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| parse_bool(&v))
            .unwrap_or(false);

        let rate_limit_per_second = env::var("RATE_LIMIT_PER_SECOND")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(2);

        let rate_limit_burst = env::var("RATE_LIMIT_BURST")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(100);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            site_url,
            site_name,
            gate_path,
            disclaimer_enabled,
            countdown_seconds,
            privacy_policy_url,
            imprint_url,
            behind_proxy,
            rate_limit_per_second,
            rate_limit_burst,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `site_url` is not an HTTP(S) URL
    /// - `countdown_seconds` is outside 1..=60
    /// - a rate limit value is zero
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !matches!(self.site_url.scheme(), "http" | "https") || self.site_url.host().is_none() {
            anyhow::bail!(
                "SITE_URL must be an absolute http(s) URL, got '{}'",
                self.site_url
            );
        }

        if self.gate_path == "/" {
            anyhow::bail!("GATE_PATH must not be the site root");
        }

        if !(1..=60).contains(&self.countdown_seconds) {
            anyhow::bail!(
                "COUNTDOWN_SECONDS must be between 1 and 60, got {}",
                self.countdown_seconds
            );
        }

        if self.rate_limit_per_second == 0 || self.rate_limit_burst == 0 {
            anyhow::bail!("RATE_LIMIT_PER_SECOND and RATE_LIMIT_BURST must be greater than 0");
        }

        Ok(())
    }

    /// Fail-closed redirect target for rejected gate requests.
    pub fn home_url(&self) -> &str {
        self.site_url.as_str()
    }

    /// Absolute gate URL without query, e.g. `https://fundgrube.example/fundgrube/redirect/`.
    ///
    /// The gate path is appended to the site path, so a site living under
    /// `/blog/` gets `/blog/fundgrube/redirect/`.
    pub fn gate_base_url(&self) -> String {
        site_page(&self.site_url, self.gate_path.trim_start_matches('/'))
    }

    /// Route pattern for the router (trailing slash trimmed).
    pub fn gate_route(&self) -> String {
        let trimmed = self.gate_path.trim_end_matches('/');
        if trimmed.is_empty() {
            "/".to_string()
        } else {
            trimmed.to_string()
        }
    }

    pub fn site_links(&self) -> SiteLinks {
        SiteLinks {
            name: self.site_name.clone(),
            home_url: self.home_url().to_string(),
            privacy_url: self.privacy_policy_url.clone(),
            imprint_url: self.imprint_url.clone(),
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Site: {} ({})", self.site_name, self.site_url);
        tracing::info!("  Gate: {}", self.gate_base_url());
        tracing::info!(
            "  Disclaimer: {}",
            if self.disclaimer_enabled { "enabled" } else { "disabled" }
        );
        tracing::info!("  Countdown: {}s", self.countdown_seconds);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn parse_bool(value: &str) -> bool {
    value.eq_ignore_ascii_case("true") || value == "1"
}

/// Ensures a leading slash and collapses an empty path to `/`.
fn normalize_gate_path(path: &str) -> String {
    let trimmed = path.trim();
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

/// Appends `relative` to the path of `site`, dropping any query or fragment.
fn site_page(site: &Url, relative: &str) -> String {
    let mut url = site.clone();
    url.set_query(None);
    url.set_fragment(None);
    let path = format!("{}/{}", url.path().trim_end_matches('/'), relative);
    url.set_path(&path);
    url.to_string()
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
pub(crate) fn test_config() -> Config {
    Config {
        listen_addr: "0.0.0.0:3000".to_string(),
        log_level: "info".to_string(),
        log_format: "text".to_string(),
        site_url: Url::parse("https://fundgrube.example/").unwrap(),
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
