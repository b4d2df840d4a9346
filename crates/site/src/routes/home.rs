//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use gearbox_core::catalog::{self, Stat};
use serde::Deserialize;
use tracing::instrument;

use crate::filters;
use crate::layout::PageContext;
use crate::middleware::CspNonce;
use crate::state::AppState;
use crate::views::{CarouselView, ServiceCard, SlideView, TestimonialView, parse_index};

/// Carousel positions for visitors without JavaScript.
#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    pub slide: Option<String>,
    pub review: Option<String>,
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub page: PageContext,
    pub slides: Vec<SlideView>,
    pub hero: Option<CarouselView>,
    pub services: Vec<ServiceCard>,
    pub stats: &'static [Stat],
    pub testimonials: Vec<TestimonialView>,
    pub reviews: Option<CarouselView>,
    /// e.g. "4.8", `None` without testimonials.
    pub average_rating: Option<String>,
}

/// Display the home page.
#[instrument(skip(state, nonce))]
pub async fn home(
    State(state): State<AppState>,
    nonce: CspNonce,
    Query(query): Query<HomeQuery>,
) -> impl IntoResponse {
    let assets = state.assets();

    let slides: Vec<SlideView> = catalog::hero_slides()
        .iter()
        .map(|slide| SlideView::new(assets, slide))
        .collect();
    let testimonials: Vec<TestimonialView> = catalog::testimonials()
        .iter()
        .map(|t| TestimonialView::new(assets, t))
        .collect();

    HomeTemplate {
        page: PageContext::new(&state, &nonce, "/"),
        hero: CarouselView::new(slides.len(), parse_index(query.slide.as_deref())),
        slides,
        services: ServiceCard::all(assets, &catalog::popular_services()),
        stats: catalog::site_profile().stats,
        reviews: CarouselView::new(testimonials.len(), parse_index(query.review.as_deref())),
        testimonials,
        average_rating: catalog::average_rating().map(|avg| format!("{avg:.1}")),
    }
}
