//! Service catalog route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use gearbox_core::Service;
use gearbox_core::catalog::{self, CategoryFilter};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::filters;
use crate::layout::PageContext;
use crate::middleware::CspNonce;
use crate::state::AppState;
use crate::views::{ServiceCard, TestimonialView};

/// Related services shown under a service detail.
const RELATED_LIMIT: usize = 3;

/// Catalog query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct ServicesQuery {
    pub category: Option<String>,
}

/// A category filter tab.
#[derive(Debug, Clone)]
pub struct CategoryTab {
    pub href: String,
    pub label: &'static str,
    pub active: bool,
}

/// Service catalog template.
#[derive(Template, WebTemplate)]
#[template(path = "services/index.html")]
pub struct ServicesIndexTemplate {
    pub page: PageContext,
    pub tabs: Vec<CategoryTab>,
    /// Label of the selected category, `None` for all.
    pub selected: Option<&'static str>,
    pub services: Vec<ServiceCard>,
}

/// Service detail template.
#[derive(Template, WebTemplate)]
#[template(path = "services/show.html")]
pub struct ServiceShowTemplate {
    pub page: PageContext,
    pub card: ServiceCard,
    pub related: Vec<ServiceCard>,
    pub testimonials: Vec<TestimonialView>,
}

fn tabs(filter: CategoryFilter) -> Vec<CategoryTab> {
    let mut tabs = vec![CategoryTab {
        href: "/services".to_string(),
        label: "All Services",
        active: filter == CategoryFilter::All,
    }];
    tabs.extend(catalog::categories_in_use().into_iter().map(|category| {
        CategoryTab {
            href: format!("/services?category={}", category.slug()),
            label: category.label(),
            active: filter == CategoryFilter::Only(category),
        }
    }));
    tabs
}

/// Display the service catalog, optionally filtered by category.
///
/// Unknown categories show every service.
#[instrument(skip(state, nonce))]
pub async fn index(
    State(state): State<AppState>,
    nonce: CspNonce,
    Query(query): Query<ServicesQuery>,
) -> impl IntoResponse {
    let filter = CategoryFilter::parse(query.category.as_deref());
    let selected = filter.category().map(|c| c.label());

    let path = match filter.category() {
        Some(category) => format!("/services?category={}", category.slug()),
        None => "/services".to_string(),
    };
    let page = PageContext::new(&state, &nonce, "/services").seo(|seo| {
        let seo = seo
            .title(selected.unwrap_or("Our Services"))
            .description(
                "Engine, brake, electrical, transmission, tire and climate services with upfront prices and a 24-month warranty.",
            );
        seo.canonical(state.config(), &path)
    });

    ServicesIndexTemplate {
        page,
        tabs: tabs(filter),
        selected,
        services: ServiceCard::all(state.assets(), &catalog::filter_services(filter)),
    }
}

/// Display one service.
///
/// # Errors
///
/// Returns `AppError::NotFound` for unknown ids.
#[instrument(skip(state, nonce))]
pub async fn show(
    State(state): State<AppState>,
    nonce: CspNonce,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let service = catalog::service_by_id(&id).ok_or_else(|| AppError::NotFound(id.clone()))?;
    let card = ServiceCard::new(state.assets(), service);

    let page = PageContext::new(&state, &nonce, &format!("/services/{}", service.id)).seo(|seo| {
        let seo = seo
            .title(service.title)
            .description(service.description)
            .keywords(&[service.title, service.category.label()])
            .article();
        if card.image.is_placeholder() {
            seo
        } else {
            seo.image(state.config(), &card.image.src)
        }
    });

    // Same category first, then popular services.
    let mut related: Vec<&'static Service> = Vec::with_capacity(RELATED_LIMIT);
    for candidate in catalog::filter_services(CategoryFilter::Only(service.category))
        .into_iter()
        .chain(catalog::popular_services())
    {
        if related.len() == RELATED_LIMIT {
            break;
        }
        if candidate.id != service.id && !related.iter().any(|r| r.id == candidate.id) {
            related.push(candidate);
        }
    }

    let testimonials = catalog::testimonials()
        .iter()
        .filter(|t| t.service == Some(service.id))
        .map(|t| TestimonialView::new(state.assets(), t))
        .collect();

    Ok(ServiceShowTemplate {
        page,
        card,
        related: ServiceCard::all(state.assets(), &related),
        testimonials,
    })
}

#[cfg(test)]
mod tests {
    use gearbox_core::ServiceCategory;

    use super::*;

    #[test]
    fn test_tabs_mark_selected_category() {
        let tabs = tabs(CategoryFilter::Only(ServiceCategory::Brakes));
        assert_eq!(tabs.iter().filter(|t| t.active).count(), 1);
        let active = tabs.iter().find(|t| t.active).map(|t| t.href.as_str());
        assert_eq!(active, Some("/services?category=brakes"));
    }

    #[test]
    fn test_tabs_all_first() {
        let tabs = tabs(CategoryFilter::All);
        assert!(tabs.first().is_some_and(|t| t.active && t.href == "/services"));
        assert_eq!(tabs.len(), catalog::categories_in_use().len() + 1);
    }
}
