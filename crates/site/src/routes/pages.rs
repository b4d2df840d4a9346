//! Static content page route handlers.
//!
//! Serves the markdown-based privacy and terms pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Router, extract::State, response::IntoResponse, routing::get};
use chrono::NaiveDate;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::filters;
use crate::layout::PageContext;
use crate::middleware::CspNonce;
use crate::state::AppState;

/// Content page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/content.html")]
pub struct ContentPageTemplate {
    pub page: PageContext,
    pub title: String,
    pub updated_at: Option<NaiveDate>,
    pub content_html: String,
}

/// Serve a content page by slug.
fn serve_content_page(state: &AppState, nonce: &CspNonce, slug: &str) -> Result<ContentPageTemplate> {
    let page = state
        .content()
        .get_page(slug)
        .ok_or_else(|| AppError::NotFound(format!("page {slug}")))?;

    let context = PageContext::new(state, nonce, &format!("/{slug}")).seo(|seo| {
        let seo = seo.title(&page.meta.title).article();
        match page.meta.description.as_deref() {
            Some(description) => seo.description(description),
            None => seo,
        }
    });

    Ok(ContentPageTemplate {
        page: context,
        title: page.meta.title.clone(),
        updated_at: page.meta.updated_at,
        content_html: page.content_html.clone(),
    })
}

/// Display the Terms of Service page.
///
/// # Errors
///
/// Returns 404 if the page doesn't exist.
#[instrument(skip(state, nonce))]
pub async fn terms(State(state): State<AppState>, nonce: CspNonce) -> Result<impl IntoResponse> {
    serve_content_page(&state, &nonce, "terms")
}

/// Display the Privacy Policy page.
///
/// # Errors
///
/// Returns 404 if the page doesn't exist.
#[instrument(skip(state, nonce))]
pub async fn privacy(State(state): State<AppState>, nonce: CspNonce) -> Result<impl IntoResponse> {
    serve_content_page(&state, &nonce, "privacy")
}

/// Create the pages routes router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/terms", get(terms))
        .route("/privacy", get(privacy))
}
