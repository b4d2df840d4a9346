//! Crawler endpoints: `robots.txt` and `sitemap.xml`.

use axum::{
    Router,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::get,
};
use tracing::instrument;

use crate::seo;
use crate::state::AppState;

/// Serve `robots.txt`.
#[instrument(skip(state))]
pub async fn robots(State(state): State<AppState>) -> Response {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        seo::robots(state.config()),
    )
        .into_response()
}

/// Serve `sitemap.xml`. Content pages are listed only when loaded.
#[instrument(skip(state))]
pub async fn sitemap(State(state): State<AppState>) -> Response {
    let xml = seo::sitemap(state.config(), &state.content().slugs());
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        xml,
    )
        .into_response()
}

/// Create the crawler routes router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/robots.txt", get(robots))
        .route("/sitemap.xml", get(sitemap))
}
