//! Payload handed to the page renderer for an accepted gate request.

use super::redirect_request::RedirectRequest;
use super::service::ServiceProfile;
use crate::domain::countdown::Countdown;

/// Site-wide links shown around the disclaimer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLinks {
    pub name: String,
    pub home_url: String,
    pub privacy_url: String,
    pub imprint_url: String,
}

/// Everything the disclaimer page needs. Built only from an accepted request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisclaimerPage {
    pub profile: &'static ServiceProfile,
    pub target_url: String,
    pub title: Option<String>,
    pub countdown: Countdown,
    pub site: SiteLinks,
}

impl DisclaimerPage {
    pub fn new(request: RedirectRequest, countdown: Countdown, site: SiteLinks) -> Self {
        Self {
            profile: request.service.profile(),
            target_url: request.target_url,
            title: request.title,
            countdown,
            site,
        }
    }
}
