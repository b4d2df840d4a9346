//! Web app manifest route handler.

use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use gearbox_core::catalog;

/// Serve the web app manifest.
pub async fn webmanifest() -> Response {
    let profile = catalog::site_profile();

    let manifest = serde_json::json!({
        "name": profile.name,
        "short_name": "Gearbox",
        "description": profile.tagline,
        "start_url": "/",
        "icons": [
            {
                "src": "/static/images/favicon.svg",
                "sizes": "any",
                "type": "image/svg+xml"
            }
        ],
        "theme_color": "#c2410c",
        "background_color": "#f8fafc",
        "display": "standalone"
    });

    (
        [(header::CONTENT_TYPE, "application/manifest+json")],
        manifest.to_string(),
    )
        .into_response()
}
