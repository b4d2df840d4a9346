//! About page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use chrono::Datelike;
use gearbox_core::catalog::{self, OpeningHours, Stat};
use tracing::instrument;

use crate::filters;
use crate::layout::PageContext;
use crate::middleware::CspNonce;
use crate::state::AppState;

/// About page template.
#[derive(Template, WebTemplate)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub page: PageContext,
    /// Story body from `content/pages/about.md`, if present.
    pub story_html: Option<String>,
    pub years_in_business: i32,
    pub stats: &'static [Stat],
    pub commitments: &'static [&'static str],
    pub hours: &'static [OpeningHours],
}

/// Display the about page.
#[instrument(skip(state, nonce))]
pub async fn about(State(state): State<AppState>, nonce: CspNonce) -> impl IntoResponse {
    let profile = catalog::site_profile();
    let story = state.content().get_page("about");

    let page = PageContext::new(&state, &nonce, "/about").seo(|seo| {
        let seo = seo.title("About Us");
        match story.and_then(|p| p.meta.description.as_deref()) {
            Some(description) => seo.description(description),
            None => seo,
        }
    });

    AboutTemplate {
        page,
        story_html: story.map(|p| p.content_html.clone()),
        years_in_business: chrono::Local::now().year() - i32::from(profile.founded),
        stats: profile.stats,
        commitments: profile.commitments,
        hours: profile.hours,
    }
}
