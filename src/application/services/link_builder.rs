//! Construction of gate and sharing URLs.

use crate::domain::entities::ServiceId;
use std::collections::BTreeMap;
use url::form_urlencoded;

const FACEBOOK_SHARER: &str = "https://www.facebook.com/sharer/sharer.php";
const TWITTER_INTENT: &str = "https://twitter.com/intent/tweet";
const WHATSAPP_SEND: &str = "https://wa.me/";

/// Builds links that lead through the gate.
///
/// Pure: output depends only on the constructor arguments and the call's inputs.
#[derive(Debug, Clone)]
pub struct LinkBuilder {
    gate_base: String,
    disclaimer_enabled: bool,
}

impl LinkBuilder {
    /// Creates a builder.
    ///
    /// # Arguments
    ///
    /// - `gate_base` - absolute gate URL without query, e.g. `https://fundgrube.example/fundgrube/redirect/`
    /// - `disclaimer_enabled` - whether [`Self::build_sharing_urls`] wraps links through the gate
    pub fn new(gate_base: impl Into<String>, disclaimer_enabled: bool) -> Self {
        Self {
            gate_base: gate_base.into(),
            disclaimer_enabled,
        }
    }

    pub fn disclaimer_enabled(&self) -> bool {
        self.disclaimer_enabled
    }

    pub fn gate_base(&self) -> &str {
        &self.gate_base
    }

    /// Returns the gate URL for `target_url`.
    ///
    /// Parameters are form-encoded once; the gate decodes once. `title` is left out
    /// when absent or empty.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let builder = LinkBuilder::new("https://fundgrube.example/fundgrube/redirect/", true);
    /// assert_eq!(
    ///     builder.build_gate_url("https://wa.me/?text=hi", ServiceId::Whatsapp, None),
    ///     "https://fundgrube.example/fundgrube/redirect/?url=https%3A%2F%2Fwa.me%2F%3Ftext%3Dhi&service=whatsapp"
    /// );
    /// ```
    pub fn build_gate_url(&self, target_url: &str, service: ServiceId, title: Option<&str>) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        query
            .append_pair("url", target_url)
            .append_pair("service", service.as_str());

        if let Some(title) = title.filter(|t| !t.is_empty()) {
            query.append_pair("title", title);
        }

        format!("{}?{}", self.gate_base, query.finish())
    }

    /// Returns the sharing URL of every service for the item at `target_url`.
    ///
    /// When the disclaimer is enabled each native URL is wrapped with
    /// [`Self::build_gate_url`], otherwise the native URLs are returned as-is.
    pub fn build_sharing_urls(&self, target_url: &str, title: &str) -> BTreeMap<ServiceId, String> {
        ServiceId::ALL
            .into_iter()
            .map(|service| {
                let native = native_sharing_url(service, target_url, title);
                let link = if self.disclaimer_enabled {
                    self.build_gate_url(&native, service, Some(title))
                } else {
                    native
                };
                (service, link)
            })
            .collect()
    }
}

/// Share endpoint of `service` prefilled with the item link and title.
pub fn native_sharing_url(service: ServiceId, target_url: &str, title: &str) -> String {
    match service {
        ServiceId::Facebook => with_query(FACEBOOK_SHARER, &[("u", target_url), ("quote", title)]),
        ServiceId::Twitter => with_query(TWITTER_INTENT, &[("text", title), ("url", target_url)]),
        ServiceId::Whatsapp => {
            let text = format!("{title} - {target_url}");
            with_query(WHATSAPP_SEND, &[("text", text.as_str())])
        }
    }
}

fn with_query(base: &str, pairs: &[(&str, &str)]) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish();
    format!("{base}?{query}")
}
