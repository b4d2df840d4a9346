//! Data shared by every page rendered through `base.html`.

use gearbox_core::catalog::{self, SiteProfile};

use crate::middleware::CspNonce;
use crate::seo::Seo;
use crate::state::AppState;

/// A main navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

/// Header navigation. Booking is rendered separately as the header button.
pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        href: "/",
        label: "Home",
    },
    NavLink {
        href: "/about",
        label: "About",
    },
    NavLink {
        href: "/services",
        label: "Services",
    },
    NavLink {
        href: "/contact",
        label: "Contact",
    },
];

/// Layout context: head metadata, nonce and business details.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub seo: Seo,
    /// Request path without query, used for active navigation.
    pub path: String,
    pub nonce: String,
    pub json_ld: String,
    pub profile: &'static SiteProfile,
    pub nav: &'static [NavLink],
}

impl PageContext {
    #[must_use]
    pub fn new(state: &AppState, nonce: &CspNonce, path: &str) -> Self {
        Self {
            seo: Seo::new(state.config(), path),
            path: path.to_string(),
            nonce: nonce.value().to_string(),
            json_ld: state.json_ld().to_string(),
            profile: catalog::site_profile(),
            nav: NAV_LINKS,
        }
    }

    /// Adjust the page's metadata.
    #[must_use]
    pub fn seo(mut self, f: impl FnOnce(Seo) -> Seo) -> Self {
        self.seo = f(self.seo);
        self
    }

    /// Whether `href` is the current section.
    #[must_use]
    pub fn is_active(&self, href: &str) -> bool {
        if href == "/" {
            return self.path == "/";
        }
        self.path == href
            || self
                .path
                .strip_prefix(href)
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::path::PathBuf;

    use url::Url;

    use super::*;
    use crate::assets::AssetManifest;
    use crate::config::{SentryConfig, SiteConfig};
    use crate::content::ContentStore;

    fn page(path: &str) -> PageContext {
        let config = SiteConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            base_url: Url::parse("http://localhost:3000").unwrap(),
            content_dir: PathBuf::from("content"),
            static_dir: PathBuf::from("static"),
            sentry: SentryConfig::default(),
        };
        let state = AppState::new(config, ContentStore::default(), AssetManifest::default());
        PageContext::new(&state, &CspNonce("n".to_string()), path)
    }

    #[test]
    fn test_active_home_only_on_root() {
        assert!(page("/").is_active("/"));
        assert!(!page("/about").is_active("/"));
    }

    #[test]
    fn test_active_section_prefix() {
        let ctx = page("/services/brake-service");
        assert!(ctx.is_active("/services"));
        assert!(!ctx.is_active("/about"));
        assert!(!page("/servicesx").is_active("/services"));
    }

    #[test]
    fn test_seo_override() {
        let ctx = page("/about").seo(|seo| seo.title("About Us"));
        assert_eq!(ctx.seo.title, "About Us | Gearbox Auto Repair");
        assert_eq!(ctx.nonce, "n");
        assert!(ctx.json_ld.contains("AutoRepair"));
    }
}
