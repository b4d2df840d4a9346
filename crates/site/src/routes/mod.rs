//! HTTP route handlers for the site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page (hero carousel, services, reviews)
//! GET  /health                 - Health check
//!
//! # Pages
//! GET  /about                  - About the shop
//! GET  /services               - Service catalog (?category=<slug>)
//! GET  /services/{id}          - Service detail
//! GET  /privacy                - Privacy policy (markdown)
//! GET  /terms                  - Terms of service (markdown)
//!
//! # Forms (POSTs rate limited)
//! GET  /contact                - Contact form
//! POST /contact                - Validate contact form
//! GET  /appointment            - Booking form (?service=<id>)
//! POST /appointment            - Validate booking form
//!
//! # Crawlers & browsers
//! GET  /robots.txt             - Robots file
//! GET  /sitemap.xml            - Sitemap
//! GET  /site.webmanifest       - Web app manifest
//! ```

pub mod about;
pub mod appointment;
pub mod contact;
pub mod home;
pub mod manifest;
pub mod pages;
pub mod seo;
pub mod services;

use axum::{
    Router,
    routing::{get, post},
};

use crate::error::AppError;
use crate::middleware::form_rate_limiter;
use crate::state::AppState;

/// Create the service catalog routes router.
pub fn service_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(services::index))
        .route("/{id}", get(services::show))
}

/// Create the form routes router. Only submissions are rate limited.
pub fn form_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/contact",
            get(contact::show).merge(post(contact::submit).layer(form_rate_limiter())),
        )
        .route(
            "/appointment",
            get(appointment::show).merge(post(appointment::submit).layer(form_rate_limiter())),
        )
}

/// Create all routes for the site.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/health", get(health))
        .route("/about", get(about::about))
        .nest("/services", service_routes())
        .merge(form_routes())
        .merge(pages::router())
        .merge(seo::router())
        .route("/site.webmanifest", get(manifest::webmanifest))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
pub async fn health() -> &'static str {
    "ok"
}

/// Fallback for unknown routes.
pub async fn not_found() -> AppError {
    AppError::NotFound("route".to_string())
}
