//! Gearbox Auto Repair site library.
//!
//! This crate provides the site as a library so the router can be tested
//! end to end and the CLI can reuse configuration, content loading and
//! sitemap generation.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod assets;
pub mod config;
pub mod content;
pub mod error;
pub mod filters;
pub mod layout;
pub mod middleware;
pub mod routes;
pub mod seo;
pub mod state;
pub mod views;

use std::time::Duration;

use axum::{Router, http::Request, middleware::from_fn, middleware::from_fn_with_state};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::state::AppState;

/// Build the full application router with every middleware layer.
///
/// Sentry layers are outermost so they see the whole request.
pub fn app(state: AppState) -> Router {
    let static_dir = state.config().static_dir.clone();

    Router::new()
        .merge(routes::routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(routes::not_found)
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(from_fn_with_state(
            state.clone(),
            middleware::error_page_middleware,
        ))
        .layer(from_fn(middleware::security_headers_middleware))
        .layer(from_fn(middleware::csp_nonce_middleware))
        .layer(from_fn(middleware::request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>, latency: Duration, span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::path::PathBuf;

    use axum::body::Body;
    use axum::http::StatusCode;
    use tower::ServiceExt;
    use url::Url;

    use super::*;
    use crate::assets::AssetManifest;
    use crate::config::{SentryConfig, SiteConfig};
    use crate::content::ContentStore;

    fn state() -> AppState {
        let config = SiteConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            base_url: Url::parse("http://localhost:3000").unwrap(),
            content_dir: PathBuf::from("content"),
            static_dir: PathBuf::from("static"),
            sentry: SentryConfig::default(),
        };
        AppState::new(config, ContentStore::default(), AssetManifest::default())
    }

    #[tokio::test]
    async fn test_health() {
        let response = app(state())
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn test_missing_content_page_is_404() {
        let response = app(state())
            .oneshot(Request::get("/privacy").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
