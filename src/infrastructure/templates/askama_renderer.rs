//! Askama-backed disclaimer page renderer.

use crate::domain::entities::{DisclaimerPage, SiteLinks};
use crate::domain::renderer::{DisclaimerRenderer, RenderError};
use askama::Template;

/// Template for the redirect disclaimer page.
///
/// Renders `templates/redirect_disclaimer.html` with:
/// - Service branding and privacy policy link
/// - Shared item title and literal target URL (both HTML-escaped)
/// - Countdown, "go now" and cancel controls
#[derive(Template)]
#[template(path = "redirect_disclaimer.html")]
pub struct DisclaimerTemplate<'a> {
    pub service_name: &'a str,
    pub icon: &'a str,
    pub color: &'a str,
    pub privacy_url: &'a str,
    pub target_url: &'a str,
    pub title: Option<&'a str>,
    pub countdown_seconds: u32,
    pub progress_percent: u8,
    pub site: &'a SiteLinks,
}

impl<'a> From<&'a DisclaimerPage> for DisclaimerTemplate<'a> {
    fn from(page: &'a DisclaimerPage) -> Self {
        Self {
            service_name: page.profile.name,
            icon: page.profile.icon,
            color: page.profile.color,
            privacy_url: page.profile.privacy_url,
            target_url: &page.target_url,
            title: page.title.as_deref(),
            countdown_seconds: page.countdown.seconds(),
            progress_percent: page.countdown.progress_percent(),
            site: &page.site,
        }
    }
}

/// Renders [`DisclaimerPage`]s through [`DisclaimerTemplate`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AskamaRenderer;

impl AskamaRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl DisclaimerRenderer for AskamaRenderer {
    fn render(&self, page: &DisclaimerPage) -> Result<String, RenderError> {
        DisclaimerTemplate::from(page)
            .render()
            .map_err(|e| RenderError::Template(e.to_string()))
    }
}
