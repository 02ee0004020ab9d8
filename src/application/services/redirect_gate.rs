//! Validation of outbound redirect requests.

use crate::domain::entities::{GateQuery, RedirectDecision, RedirectRequest, Rejection, ServiceId};
use crate::utils::target_url::{host_of, parse_target_url};
use crate::utils::title::sanitize_title;
use tracing::debug;

/// Decides whether a gate request may be shown the disclaimer page.
///
/// Stateless: every call works only on its input and the static service table.
#[derive(Debug, Clone, Copy, Default)]
pub struct RedirectGate;

impl RedirectGate {
    pub fn new() -> Self {
        Self
    }

    /// Decodes a raw query string once and validates it.
    pub fn evaluate_query(&self, raw_query: &str) -> RedirectDecision {
        self.evaluate(GateQuery::parse(raw_query))
    }

    /// Validates decoded query parameters.
    ///
    /// # Validation Order
    ///
    /// Stops at the first failure:
    ///
    /// 1. `url` is an absolute HTTP(S) URL with a host, else [`Rejection::MalformedUrl`]
    /// 2. `service` is a known [`ServiceId`], else [`Rejection::UnknownService`]
    /// 3. the lower-cased host is one of the service's literal hosts, else
    ///    [`Rejection::DomainNotAllowed`]
    pub fn evaluate(&self, query: GateQuery) -> RedirectDecision {
        match self.validate(&query) {
            Ok(request) => RedirectDecision::Accepted(request),
            Err(rejection) => {
                debug!(
                    reason = rejection.as_str(),
                    service = %query.service,
                    "Gate request rejected"
                );
                RedirectDecision::Rejected(rejection)
            }
        }
    }

    fn validate(&self, query: &GateQuery) -> Result<RedirectRequest, Rejection> {
        let url = parse_target_url(&query.url).map_err(|_| Rejection::MalformedUrl)?;

        let service: ServiceId = query
            .service
            .parse()
            .map_err(|_| Rejection::UnknownService)?;

        let host = host_of(&url).ok_or(Rejection::MalformedUrl)?;
        if !service.profile().allows_host(&host) {
            return Err(Rejection::DomainNotAllowed);
        }

        Ok(RedirectRequest {
            target_url: url.into(),
            service,
            title: query.title.as_deref().and_then(sanitize_title),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(url: &str, service: &str) -> GateQuery {
        GateQuery {
            url: url.to_string(),
            service: service.to_string(),
            title: None,
        }
    }

    #[test]
    fn test_every_whitelisted_host_is_accepted() {
        let gate = RedirectGate::new();

        for service in ServiceId::ALL {
            for host in service.profile().allowed_hosts {
                let decision = gate.evaluate(query(&format!("https://{host}/x"), service.as_str()));
                assert!(decision.is_accepted(), "{host} rejected for {service}");
            }
        }
    }

    #[test]
    fn test_cross_service_hosts_are_rejected() {
        let gate = RedirectGate::new();

        for declared in ServiceId::ALL {
            for owner in ServiceId::ALL {
                if owner == declared {
                    continue;
                }
                for host in owner.profile().allowed_hosts {
                    let decision =
                        gate.evaluate(query(&format!("https://{host}/x"), declared.as_str()));
                    assert_eq!(
                        decision,
                        RedirectDecision::Rejected(Rejection::DomainNotAllowed),
                        "{host} accepted for {declared}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_facebook_url_declared_as_twitter() {
        let decision = RedirectGate::new().evaluate(query("https://facebook.com/x", "twitter"));
        assert_eq!(
            decision,
            RedirectDecision::Rejected(Rejection::DomainNotAllowed)
        );
    }

    #[test]
    fn test_lookalike_hosts_are_rejected() {
        let gate = RedirectGate::new();
        for url in [
            "https://evil.com/?facebook.com",
            "https://facebook.com.evil.com/",
            "https://notfacebook.com/",
            "https://l.facebook.com/l.php",
            "https://facebook.com@evil.com/",
        ] {
            assert_eq!(
                gate.evaluate(query(url, "facebook")),
                RedirectDecision::Rejected(Rejection::DomainNotAllowed),
                "{url}"
            );
        }
    }

    #[test]
    fn test_host_match_is_case_insensitive() {
        let decision = RedirectGate::new().evaluate(query("https://WA.ME/?text=hi", "whatsapp"));
        assert!(decision.is_accepted());
    }

    #[test]
    fn test_malformed_url() {
        let gate = RedirectGate::new();
        for url in ["not a url", "", "javascript:alert(1)", "//facebook.com/x"] {
            assert_eq!(
                gate.evaluate(query(url, "facebook")),
                RedirectDecision::Rejected(Rejection::MalformedUrl),
                "{url}"
            );
        }
    }

    #[test]
    fn test_unknown_service() {
        let decision = RedirectGate::new().evaluate(query("https://facebook.com/x", "myspace"));
        assert_eq!(decision, RedirectDecision::Rejected(Rejection::UnknownService));
    }

    #[test]
    fn test_malformed_url_checked_before_service() {
        let decision = RedirectGate::new().evaluate(query("not a url", "myspace"));
        assert_eq!(decision, RedirectDecision::Rejected(Rejection::MalformedUrl));
    }

    #[test]
    fn test_accepted_request_carries_sanitized_title() {
        let decision = RedirectGate::new().evaluate(GateQuery {
            url: "https://www.facebook.com/sharer/sharer.php?u=https://example.com/item/42"
                .to_string(),
            service: "facebook".to_string(),
            title: Some("  Rotes <em>Fahrrad</em> ".to_string()),
        });

        assert_eq!(
            decision,
            RedirectDecision::Accepted(RedirectRequest {
                target_url:
                    "https://www.facebook.com/sharer/sharer.php?u=https://example.com/item/42"
                        .to_string(),
                service: ServiceId::Facebook,
                title: Some("Rotes Fahrrad".to_string()),
            })
        );
    }

    #[test]
    fn test_blank_title_dropped() {
        let decision = RedirectGate::new().evaluate(GateQuery {
            url: "https://x.com/intent/tweet".to_string(),
            service: "twitter".to_string(),
            title: Some("   ".to_string()),
        });

        match decision {
            RedirectDecision::Accepted(request) => assert!(request.title.is_none()),
            other => panic!("expected accepted, got {other:?}"),
        }
    }

    #[test]
    fn test_evaluate_query_decodes_once() {
        let gate = RedirectGate::new();

        let decision = gate.evaluate_query("url=https%3A%2F%2Fwa.me%2F%3Ftext%3Dhi&service=whatsapp");
        assert!(decision.is_accepted());

        let decision =
            gate.evaluate_query("url=https%253A%252F%252Fwa.me%252F&service=whatsapp");
        assert_eq!(decision, RedirectDecision::Rejected(Rejection::MalformedUrl));
    }

    #[test]
    fn test_evaluate_query_padded_url_rejected() {
        let decision = RedirectGate::new()
            .evaluate_query("url=%20%09https%3A%2F%2Ffacebook.com%2Fx%20&service=facebook");
        assert_eq!(decision, RedirectDecision::Rejected(Rejection::MalformedUrl));
    }

    #[test]
    fn test_service_name_is_not_trimmed() {
        let gate = RedirectGate::new();
        for service in [" facebook", "facebook ", "Facebook"] {
            assert_eq!(
                gate.evaluate(query("https://facebook.com/x", service)),
                RedirectDecision::Rejected(Rejection::UnknownService),
                "{service:?}"
            );
        }
    }

    #[test]
    fn test_evaluate_query_missing_parameters() {
        let gate = RedirectGate::new();
        assert_eq!(
            gate.evaluate_query(""),
            RedirectDecision::Rejected(Rejection::MalformedUrl)
        );
        assert_eq!(
            gate.evaluate_query("url=https%3A%2F%2Fwa.me%2F"),
            RedirectDecision::Rejected(Rejection::UnknownService)
        );
    }
}
