//! Template-ready views over catalog records.
//!
//! Images are resolved against the asset manifest here so templates only
//! decide between `<img>` and the placeholder.

use gearbox_core::catalog::{
    self, AVATAR_FALLBACK_IMAGE, HERO_FALLBACK_IMAGE, SERVICE_FALLBACK_IMAGE,
};
use gearbox_core::carousel::{AUTOPLAY_INTERVAL, TRANSITION};
use gearbox_core::{Carousel, HeroSlide, Service, Testimonial};

use crate::assets::{AssetManifest, ImageView};

/// A service with its resolved image.
#[derive(Debug, Clone)]
pub struct ServiceCard {
    pub service: &'static Service,
    pub image: ImageView,
}

impl ServiceCard {
    #[must_use]
    pub fn new(assets: &AssetManifest, service: &'static Service) -> Self {
        Self {
            service,
            image: assets.resolve(service.image, SERVICE_FALLBACK_IMAGE, service.title),
        }
    }

    #[must_use]
    pub fn all(assets: &AssetManifest, services: &[&'static Service]) -> Vec<Self> {
        services.iter().map(|s| Self::new(assets, s)).collect()
    }
}

/// A hero slide with its resolved background image.
#[derive(Debug, Clone)]
pub struct SlideView {
    pub slide: &'static HeroSlide,
    pub image: ImageView,
}

impl SlideView {
    #[must_use]
    pub fn new(assets: &AssetManifest, slide: &'static HeroSlide) -> Self {
        Self {
            slide,
            image: assets.resolve(slide.image, HERO_FALLBACK_IMAGE, slide.title),
        }
    }
}

/// A testimonial with its avatar and the title of the service it mentions.
#[derive(Debug, Clone)]
pub struct TestimonialView {
    pub testimonial: &'static Testimonial,
    pub avatar: ImageView,
    pub initials: String,
    pub service_title: Option<&'static str>,
}

impl TestimonialView {
    #[must_use]
    pub fn new(assets: &AssetManifest, testimonial: &'static Testimonial) -> Self {
        Self {
            testimonial,
            avatar: assets.resolve(testimonial.image, AVATAR_FALLBACK_IMAGE, testimonial.author),
            initials: testimonial.initials(),
            service_title: testimonial
                .service
                .and_then(catalog::service_by_id)
                .map(|s| s.title),
        }
    }
}

/// Server-rendered carousel position with prev/next targets for the no-JS
/// links and timing for the client script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselView {
    pub current: usize,
    pub prev: usize,
    pub next: usize,
    pub len: usize,
    pub autoplay_ms: u128,
    pub transition_ms: u128,
}

impl CarouselView {
    /// `None` for an empty list; templates render the placeholder instead.
    #[must_use]
    pub fn new(len: usize, requested: usize) -> Option<Self> {
        let carousel = Carousel::at(len, requested);
        Some(Self {
            current: carousel.current()?,
            prev: carousel.prev_index()?,
            next: carousel.next_index()?,
            len,
            autoplay_ms: AUTOPLAY_INTERVAL.as_millis(),
            transition_ms: TRANSITION.as_millis(),
        })
    }

    /// Whether there is anything to rotate.
    #[must_use]
    pub const fn rotates(&self) -> bool {
        self.len > 1
    }
}

/// An `<option>` in a select, with the submitted value preselected.
#[derive(Debug, Clone)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

impl SelectOption {
    /// Options whose label is their value.
    #[must_use]
    pub fn from_values(values: &[&'static str], selected: &str) -> Vec<Self> {
        values
            .iter()
            .map(|&value| Self {
                value,
                label: value,
                selected: value == selected,
            })
            .collect()
    }
}

/// Lenient index parsing for `?slide=` / `?review=`; anything unusable is 0.
#[must_use]
pub fn parse_index(raw: Option<&str>) -> usize {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(0)
}
