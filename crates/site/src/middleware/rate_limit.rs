//! Rate limiting for form submissions using governor and `tower_governor`.
//!
//! Forms are not sent anywhere, but each submission is validated and logged;
//! the limiter keeps scripted floods out of the logs.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use axum::extract::ConnectInfo;
use axum::http::Request;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use tower_governor::{GovernorError, GovernorLayer, governor::GovernorConfigBuilder};

// =============================================================================
// Client IP Key Extractor
// =============================================================================

/// Key extractor that trusts proxy headers first, then the peer address.
///
/// Order: `CF-Connecting-IP`, first `X-Forwarded-For` hop, `X-Real-IP`,
/// then the socket address from `ConnectInfo`.
#[derive(Clone, Copy)]
pub struct ClientIpKeyExtractor;

impl tower_governor::key_extractor::KeyExtractor for ClientIpKeyExtractor {
    type Key = IpAddr;

    fn extract<T>(&self, req: &Request<T>) -> Result<Self::Key, GovernorError> {
        let headers = req.headers();
        let header_ip = |name: &str, first_hop: bool| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(|s| if first_hop { s.split(',').next().unwrap_or(s) } else { s })
                .and_then(|s| s.trim().parse::<IpAddr>().ok())
        };

        header_ip("cf-connecting-ip", false)
            .or_else(|| header_ip("x-forwarded-for", true))
            .or_else(|| header_ip("x-real-ip", false))
            .or_else(|| {
                req.extensions()
                    .get::<ConnectInfo<SocketAddr>>()
                    .map(|ConnectInfo(addr)| addr.ip())
            })
            .ok_or(GovernorError::UnableToExtractKey)
    }
}

// =============================================================================
// Rate Limiter Configuration
// =============================================================================

/// Rate limiter layer type for Axum.
pub type RateLimiterLayer =
    GovernorLayer<ClientIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Create rate limiter for form POSTs: ~5 submissions per minute per IP.
///
/// Configuration: 1 request every 12 seconds (replenish), burst of 5.
///
/// # Panics
///
/// This function will not panic. The configuration uses only valid positive
/// integers (`per_second(12)` and `burst_size(5)`), which are always accepted
/// by `GovernorConfigBuilder`.
#[must_use]
pub fn form_rate_limiter() -> RateLimiterLayer {
    let config = GovernorConfigBuilder::default()
        .key_extractor(ClientIpKeyExtractor)
        .per_second(12)
        .burst_size(5)
        .finish()
        .expect("rate limiter config with per_second(12) and burst_size(5) is valid");
    GovernorLayer::new(Arc::new(config))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use tower_governor::key_extractor::KeyExtractor;

    use super::*;

    fn request(headers: &[(&str, &str)]) -> Request<()> {
        let mut builder = Request::builder().uri("/contact");
        for (k, v) in headers {
            builder = builder.header(*k, *v);
        }
        builder.body(()).unwrap()
    }

    #[test]
    fn test_cloudflare_header_wins() {
        let req = request(&[
            ("cf-connecting-ip", "203.0.113.7"),
            ("x-forwarded-for", "198.51.100.1"),
        ]);
        let ip = ClientIpKeyExtractor.extract(&req).unwrap();
        assert_eq!(ip.to_string(), "203.0.113.7");
    }

    #[test]
    fn test_forwarded_for_first_hop() {
        let req = request(&[("x-forwarded-for", "198.51.100.1, 10.0.0.1")]);
        let ip = ClientIpKeyExtractor.extract(&req).unwrap();
        assert_eq!(ip.to_string(), "198.51.100.1");
    }

    #[test]
    fn test_connect_info_fallback() {
        let mut req = request(&[]);
        let addr: SocketAddr = "192.0.2.5:40000".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        let ip = ClientIpKeyExtractor.extract(&req).unwrap();
        assert_eq!(ip.to_string(), "192.0.2.5");
    }

    #[test]
    fn test_no_source_is_error() {
        let req = request(&[("x-real-ip", "not-an-ip")]);
        assert!(ClientIpKeyExtractor.extract(&req).is_err());
    }
}
