//! Hero carousel slides.

use serde::Serialize;

/// Call-to-action button on a slide.
#[derive(Debug, Clone, Serialize)]
pub struct CallToAction {
    pub label: &'static str,
    /// Site path the button links to.
    pub href: &'static str,
}

/// A promotional banner cycled on the landing page.
#[derive(Debug, Clone, Serialize)]
pub struct HeroSlide {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub features: &'static [&'static str],
    pub cta: CallToAction,
}
