//! Supported sharing services and their static profiles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Third-party destination a found item can be shared to.
///
/// The set is closed: every per-service decision goes through [`ServiceId::profile`]
/// instead of comparing service names as strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceId {
    Facebook,
    Twitter,
    Whatsapp,
}

/// Error returned when a service name is not one of the supported services.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown service: {0}")]
pub struct UnknownServiceError(pub String);

/// Branding, privacy and whitelist data for one service.
#[derive(Debug, PartialEq, Eq)]
pub struct ServiceProfile {
    pub id: ServiceId,
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub privacy_url: &'static str,
    /// Exact hostnames a target URL may point at. Compared lower-cased, no suffix matching.
    pub allowed_hosts: &'static [&'static str],
}

static FACEBOOK: ServiceProfile = ServiceProfile {
    id: ServiceId::Facebook,
    name: "Facebook",
    icon: "dashicons-facebook-alt",
    color: "#1877f2",
    privacy_url: "https://www.facebook.com/privacy/explanation",
    allowed_hosts: &["facebook.com", "www.facebook.com", "m.facebook.com"],
};

static TWITTER: ServiceProfile = ServiceProfile {
    id: ServiceId::Twitter,
    name: "Twitter/X",
    icon: "dashicons-twitter",
    color: "#1da1f2",
    privacy_url: "https://twitter.com/privacy",
    allowed_hosts: &["twitter.com", "www.twitter.com", "x.com", "www.x.com"],
};

static WHATSAPP: ServiceProfile = ServiceProfile {
    id: ServiceId::Whatsapp,
    name: "WhatsApp",
    icon: "dashicons-whatsapp",
    color: "#25d366",
    privacy_url: "https://www.whatsapp.com/legal/privacy-policy",
    allowed_hosts: &["wa.me", "api.whatsapp.com", "web.whatsapp.com"],
};

impl ServiceId {
    /// All services in display order.
    pub const ALL: [ServiceId; 3] = [ServiceId::Facebook, ServiceId::Twitter, ServiceId::Whatsapp];

    /// Wire name used in the `service` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            ServiceId::Facebook => "facebook",
            ServiceId::Twitter => "twitter",
            ServiceId::Whatsapp => "whatsapp",
        }
    }

    pub fn profile(self) -> &'static ServiceProfile {
        match self {
            ServiceId::Facebook => &FACEBOOK,
            ServiceId::Twitter => &TWITTER,
            ServiceId::Whatsapp => &WHATSAPP,
        }
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceId {
    type Err = UnknownServiceError;

    /// Parses the exact lower-case wire name. `Facebook` or ` facebook` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownServiceError(s.to_string()))
    }
}

impl ServiceProfile {
    /// Returns true if `host` is one of the literal hostnames of this service.
    pub fn allows_host(&self, host: &str) -> bool {
        let host = host.to_ascii_lowercase();
        self.allowed_hosts.iter().any(|allowed| *allowed == host)
    }
}
