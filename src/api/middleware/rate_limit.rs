//! Rate limiting middleware using token bucket algorithm.

use axum::http::Request;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::net::IpAddr;
use std::sync::Arc;
use tower_governor::{
    GovernorError, GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{KeyExtractor, PeerIpKeyExtractor, SmartIpKeyExtractor},
};

use crate::config::Config;

/// Picks the client IP used as the rate limit key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientIpKeyExtractor {
    /// Socket peer address. Requires `ConnectInfo`.
    Peer,
    /// `X-Forwarded-For` / `X-Real-IP` / `Forwarded`, falling back to the peer address.
    /// Only safe behind a trusted reverse proxy.
    Forwarded,
}

impl ClientIpKeyExtractor {
    pub fn for_config(config: &Config) -> Self {
        if config.behind_proxy {
            Self::Forwarded
        } else {
            Self::Peer
        }
    }
}

impl KeyExtractor for ClientIpKeyExtractor {
    type Key = IpAddr;

    fn extract<T>(&self, req: &Request<T>) -> Result<Self::Key, GovernorError> {
        match self {
            Self::Peer => PeerIpKeyExtractor.extract(req),
            Self::Forwarded => SmartIpKeyExtractor.extract(req),
        }
    }
}

/// Creates the rate limiter for the public gate endpoints.
///
/// # Limits
///
/// - **Rate**: `RATE_LIMIT_PER_SECOND` (default 2)
/// - **Burst**: `RATE_LIMIT_BURST` (default 100)
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Per client IP, see [`ClientIpKeyExtractor`].
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/fundgrube/redirect", get(gate_handler))
///     .layer(rate_limit::layer(&config));
/// ```
pub fn layer(
    config: &Config,
) -> GovernorLayer<ClientIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(config.rate_limit_per_second)
            .burst_size(config.rate_limit_burst)
            .key_extractor(ClientIpKeyExtractor::for_config(config))
            .finish()
            .expect("rate limits are validated to be non-zero"),
    );

    GovernorLayer::new(governor_conf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config;
    use axum::extract::ConnectInfo;
    use std::net::SocketAddr;

    fn request_from(peer: &str) -> Request<()> {
        let mut req = Request::builder()
            .uri("/fundgrube/redirect")
            .header("x-forwarded-for", "203.0.113.7")
            .body(())
            .unwrap();
        let addr: SocketAddr = peer.parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        req
    }

    #[test]
    fn test_extractor_follows_config() {
        let mut config = test_config();
        assert_eq!(
            ClientIpKeyExtractor::for_config(&config),
            ClientIpKeyExtractor::Peer
        );

        config.behind_proxy = true;
        assert_eq!(
            ClientIpKeyExtractor::for_config(&config),
            ClientIpKeyExtractor::Forwarded
        );
    }

    #[test]
    fn test_peer_ignores_forwarded_header() {
        let key = ClientIpKeyExtractor::Peer
            .extract(&request_from("127.0.0.1:4000"))
            .unwrap();
        assert_eq!(key, "127.0.0.1".parse::<IpAddr>().unwrap());
    }

    #[test]
    fn test_forwarded_uses_header() {
        let key = ClientIpKeyExtractor::Forwarded
            .extract(&request_from("127.0.0.1:4000"))
            .unwrap();
        assert_eq!(key, "203.0.113.7".parse::<IpAddr>().unwrap());
    }
}
