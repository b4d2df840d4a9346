//! Page metadata, structured data, sitemap and robots.txt.

use std::fmt::Write as _;

use gearbox_core::catalog::{self, SiteProfile};
use serde_json::json;

use crate::config::SiteConfig;

/// Paths with their own handlers that belong in the sitemap.
pub const PUBLIC_PATHS: &[&str] = &["/", "/about", "/services", "/contact", "/appointment"];

/// Markdown pages served at `/<slug>`.
pub const CONTENT_PAGE_SLUGS: &[&str] = &["privacy", "terms"];

/// Metadata rendered into `<head>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seo {
    pub title: String,
    pub description: String,
    pub keywords: String,
    /// Absolute canonical URL.
    pub canonical: String,
    /// Absolute share image URL.
    pub image: String,
    /// Open Graph type.
    pub kind: &'static str,
    pub noindex: bool,
}

impl Seo {
    /// Defaults for `path`, taken from the business profile.
    #[must_use]
    pub fn new(config: &SiteConfig, path: &str) -> Self {
        let profile = catalog::site_profile();
        Self {
            title: profile.seo.title.to_string(),
            description: profile.seo.description.to_string(),
            keywords: profile.seo.keywords.join(", "),
            canonical: config.absolute_url(path),
            image: config.absolute_url(profile.seo.image),
            kind: "website",
            noindex: false,
        }
    }

    /// Set the page title; rendered as `"<title> | <business>"`.
    #[must_use]
    pub fn title(mut self, title: &str) -> Self {
        self.title = format!("{title} | {}", catalog::site_profile().name);
        self
    }

    #[must_use]
    pub fn description(mut self, description: &str) -> Self {
        description.clone_into(&mut self.description);
        self
    }

    /// Add keywords in front of the defaults.
    #[must_use]
    pub fn keywords(mut self, extra: &[&str]) -> Self {
        if !extra.is_empty() {
            self.keywords = format!("{}, {}", extra.join(", "), self.keywords);
        }
        self
    }

    /// Use a page-specific share image (site path or absolute URL).
    #[must_use]
    pub fn image(mut self, config: &SiteConfig, image: &str) -> Self {
        self.image = if image.starts_with("http://") || image.starts_with("https://") {
            image.to_string()
        } else {
            config.absolute_url(image)
        };
        self
    }

    /// Point the canonical URL at another site path, e.g. one that keeps
    /// a filter query.
    #[must_use]
    pub fn canonical(mut self, config: &SiteConfig, path: &str) -> Self {
        self.canonical = config.absolute_url(path);
        self
    }

    #[must_use]
    pub const fn article(mut self) -> Self {
        self.kind = "article";
        self
    }

    /// Keep the page out of search results (error pages, form results).
    #[must_use]
    pub const fn noindex(mut self) -> Self {
        self.noindex = true;
        self
    }
}

/// schema.org `AutoRepair` structured data for the business.
#[must_use]
pub fn business_json_ld(config: &SiteConfig, profile: &SiteProfile) -> serde_json::Value {
    let hours: Vec<String> = profile.hours.iter().filter_map(|h| h.schema()).collect();
    let same_as: Vec<&str> = profile.socials.iter().map(|s| s.url).collect();

    let mut data = json!({
        "@context": "https://schema.org",
        "@type": "AutoRepair",
        "name": profile.name,
        "description": profile.seo.description,
        "url": config.absolute_url("/"),
        "image": config.absolute_url(profile.seo.image),
        "telephone": profile.phone,
        "email": profile.email,
        "foundingDate": profile.founded.to_string(),
        "address": {
            "@type": "PostalAddress",
            "streetAddress": profile.address.street,
            "addressLocality": profile.address.city,
            "addressRegion": profile.address.region,
            "postalCode": profile.address.postal_code,
            "addressCountry": profile.address.country,
        },
        "openingHours": hours,
        "sameAs": same_as,
    });

    if let Some(average) = catalog::average_rating() {
        data["aggregateRating"] = json!({
            "@type": "AggregateRating",
            "ratingValue": format!("{average:.1}"),
            "reviewCount": catalog::testimonials().len(),
            "bestRating": "5",
        });
    }

    data
}

/// Serialize JSON for an inline `<script>` block.
///
/// `<` is escaped so the payload can never close the script element.
#[must_use]
pub fn script_json(value: &serde_json::Value) -> String {
    value.to_string().replace('<', "\\u003c")
}

/// Build `sitemap.xml` for the public pages, each service and the given
/// content page slugs.
#[must_use]
pub fn sitemap(config: &SiteConfig, content_slugs: &[&str]) -> String {
    let mut urls: Vec<String> = PUBLIC_PATHS.iter().map(|p| config.absolute_url(p)).collect();
    urls.extend(
        catalog::services()
            .iter()
            .map(|s| config.absolute_url(&format!("/services/{}", s.id))),
    );
    urls.extend(
        CONTENT_PAGE_SLUGS
            .iter()
            .filter(|slug| content_slugs.contains(*slug))
            .map(|slug| config.absolute_url(&format!("/{slug}"))),
    );

    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for url in urls {
        let _ = writeln!(xml, "  <url><loc>{}</loc></url>", xml_escape(&url));
    }
    xml.push_str("</urlset>\n");
    xml
}

/// `robots.txt` allowing everything and pointing at the sitemap.
#[must_use]
pub fn robots(config: &SiteConfig) -> String {
    format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}\n",
        config.absolute_url("/sitemap.xml")
    )
}

fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::path::PathBuf;

    use url::Url;

    use super::*;
    use crate::config::SentryConfig;

    fn config() -> SiteConfig {
        SiteConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            base_url: Url::parse("https://gearboxauto.example").unwrap(),
            content_dir: PathBuf::from("content"),
            static_dir: PathBuf::from("static"),
            sentry: SentryConfig::default(),
        }
    }

    #[test]
    fn test_defaults() {
        let seo = Seo::new(&config(), "/");
        let profile = catalog::site_profile();
        assert_eq!(seo.title, profile.seo.title);
        assert_eq!(seo.canonical, "https://gearboxauto.example/");
        assert!(seo.image.starts_with("https://gearboxauto.example/static/"));
        assert!(!seo.noindex);
    }

    #[test]
    fn test_title_suffix() {
        let seo = Seo::new(&config(), "/about").title("About Us");
        assert_eq!(seo.title, "About Us | Gearbox Auto Repair");
    }

    #[test]
    fn test_keywords_prepended() {
        let seo = Seo::new(&config(), "/").keywords(&["brake pads"]);
        assert!(seo.keywords.starts_with("brake pads, auto repair"));
    }

    #[test]
    fn test_canonical_keeps_query() {
        let seo = Seo::new(&config(), "/services").canonical(&config(), "/services?category=engine");
        assert_eq!(
            seo.canonical,
            "https://gearboxauto.example/services?category=engine"
        );
    }

    #[test]
    fn test_image_absolute_passthrough() {
        let seo = Seo::new(&config(), "/").image(&config(), "https://cdn.example.com/a.jpg");
        assert_eq!(seo.image, "https://cdn.example.com/a.jpg");
    }

    #[test]
    fn test_json_ld() {
        let data = business_json_ld(&config(), catalog::site_profile());
        assert_eq!(data["@type"], "AutoRepair");
        assert_eq!(data["address"]["addressLocality"], "Springfield");
        assert_eq!(data["openingHours"].as_array().unwrap().len(), 2);
        assert_eq!(
            data["aggregateRating"]["reviewCount"],
            catalog::testimonials().len()
        );
    }

    #[test]
    fn test_script_json_escapes_lt() {
        let value = json!({ "x": "</script><script>" });
        let out = script_json(&value);
        assert!(!out.contains('<'));
        assert!(out.contains("\\u003c/script>"));
    }

    #[test]
    fn test_sitemap() {
        let xml = sitemap(&config(), &["privacy"]);
        assert!(xml.contains("<loc>https://gearboxauto.example/</loc>"));
        assert!(xml.contains("<loc>https://gearboxauto.example/services/brake-service</loc>"));
        assert!(xml.contains("<loc>https://gearboxauto.example/privacy</loc>"));
        assert!(!xml.contains("/terms"));
        assert_eq!(
            xml.matches("<url>").count(),
            PUBLIC_PATHS.len() + catalog::services().len() + 1
        );
    }

    #[test]
    fn test_robots() {
        let txt = robots(&config());
        assert!(txt.contains("Sitemap: https://gearboxauto.example/sitemap.xml"));
    }

    #[test]
    fn test_xml_escape() {
        assert_eq!(xml_escape("a&b<c>"), "a&amp;b&lt;c&gt;");
    }
}
