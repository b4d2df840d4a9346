//! Service catalog records and category filtering.

use core::fmt;

use serde::Serialize;

/// Service category tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategory {
    Engine,
    Brakes,
    Electrical,
    Maintenance,
    Transmission,
    Tires,
    Diagnostics,
    Climate,
}

impl ServiceCategory {
    /// Every category, in display order.
    pub const ALL: &'static [Self] = &[
        Self::Engine,
        Self::Brakes,
        Self::Electrical,
        Self::Maintenance,
        Self::Transmission,
        Self::Tires,
        Self::Diagnostics,
        Self::Climate,
    ];

    /// URL slug (`?category=<slug>`).
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Engine => "engine",
            Self::Brakes => "brakes",
            Self::Electrical => "electrical",
            Self::Maintenance => "maintenance",
            Self::Transmission => "transmission",
            Self::Tires => "tires",
            Self::Diagnostics => "diagnostics",
            Self::Climate => "climate",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Engine => "Engine",
            Self::Brakes => "Brakes",
            Self::Electrical => "Electrical",
            Self::Maintenance => "Maintenance",
            Self::Transmission => "Transmission",
            Self::Tires => "Tires & Alignment",
            Self::Diagnostics => "Diagnostics",
            Self::Climate => "A/C & Heating",
        }
    }

    /// Parse a slug, case-insensitively.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.slug().eq_ignore_ascii_case(slug))
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Selected category on the services page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ServiceCategory),
}

impl CategoryFilter {
    /// Interpret a `?category=` value.
    ///
    /// Missing, empty, `all` and unknown slugs all select every service.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        raw.map(str::trim)
            .and_then(ServiceCategory::from_slug)
            .map_or(Self::All, Self::Only)
    }

    /// Whether `service` passes this filter.
    #[must_use]
    pub fn matches(self, service: &Service) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => service.category == category,
        }
    }

    /// Slug for links, `all` for [`CategoryFilter::All`].
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.slug(),
        }
    }

    /// The selected category, if any.
    #[must_use]
    pub const fn category(self) -> Option<ServiceCategory> {
        match self {
            Self::All => None,
            Self::Only(category) => Some(category),
        }
    }
}

/// One offered repair service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Service {
    pub id: &'static str,
    pub category: ServiceCategory,
    /// Icon name in the site's SVG sprite.
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Duration estimate, e.g. "1-2 hours".
    pub duration: &'static str,
    /// Display price, e.g. "From $89".
    pub price: &'static str,
    pub features: &'static [&'static str],
    pub popular: bool,
    pub image: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_round_trip_for_every_category() {
        for category in ServiceCategory::ALL {
            assert_eq!(ServiceCategory::from_slug(category.slug()), Some(*category));
        }
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!(CategoryFilter::parse(None), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(Some("")), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(Some("all")), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(Some("hovercraft")), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse(Some("engine")),
            CategoryFilter::Only(ServiceCategory::Engine)
        );
        assert_eq!(
            CategoryFilter::parse(Some(" Brakes ")),
            CategoryFilter::Only(ServiceCategory::Brakes)
        );
    }

    #[test]
    fn test_filter_slug() {
        assert_eq!(CategoryFilter::All.slug(), "all");
        assert_eq!(CategoryFilter::Only(ServiceCategory::Tires).slug(), "tires");
    }

    #[test]
    fn test_category_serializes_as_slug() {
        let json = serde_json::to_string(&ServiceCategory::Climate).unwrap_or_default();
        assert_eq!(json, "\"climate\"");
    }
}
