//! Static site content: services, testimonials, hero slides and the business
//! profile.
//!
//! Every record is `'static` and built at compile time. Nothing here is
//! created, mutated or destroyed while the site runs.

mod data;
pub mod profile;
pub mod service;
pub mod slide;
pub mod testimonial;

pub use data::{
    AVATAR_FALLBACK_IMAGE, HERO_FALLBACK_IMAGE, SERVICE_FALLBACK_IMAGE, hero_slides, services,
    site_profile, testimonials,
};
pub use profile::{Address, OpeningHours, SeoDefaults, SiteProfile, SocialLink, Stat};
pub use service::{CategoryFilter, Service, ServiceCategory};
pub use slide::{CallToAction, HeroSlide};
pub use testimonial::Testimonial;

/// Look up a service by its id.
#[must_use]
pub fn service_by_id(id: &str) -> Option<&'static Service> {
    services().iter().find(|s| s.id == id)
}

/// Services matching `filter`, in catalog order.
#[must_use]
pub fn filter_services(filter: CategoryFilter) -> Vec<&'static Service> {
    services().iter().filter(|s| filter.matches(s)).collect()
}

/// Services flagged as popular, in catalog order.
#[must_use]
pub fn popular_services() -> Vec<&'static Service> {
    services().iter().filter(|s| s.popular).collect()
}

/// Categories that have at least one service, in declaration order.
#[must_use]
pub fn categories_in_use() -> Vec<ServiceCategory> {
    ServiceCategory::ALL
        .iter()
        .copied()
        .filter(|c| services().iter().any(|s| s.category == *c))
        .collect()
}

/// Mean testimonial rating, or `None` with no testimonials.
#[must_use]
pub fn average_rating() -> Option<f64> {
    let all = testimonials();
    if all.is_empty() {
        return None;
    }
    let total: u32 = all.iter().map(|t| u32::from(t.rating.stars())).sum();
    #[allow(clippy::cast_precision_loss)] // A handful of testimonials
    let count = all.len() as f64;
    Some(f64::from(total) / count)
}
