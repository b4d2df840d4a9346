//! Application state shared across handlers.

use std::sync::Arc;

use gearbox_core::catalog;

use crate::assets::AssetManifest;
use crate::config::SiteConfig;
use crate::content::ContentStore;
use crate::seo;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. Everything in it is built
/// once at startup and read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SiteConfig,
    content: ContentStore,
    assets: AssetManifest,
    /// Business JSON-LD, serialized for the layout's `<script>` block.
    json_ld: String,
}

impl AppState {
    /// Create a new application state from already-loaded parts.
    #[must_use]
    pub fn new(config: SiteConfig, content: ContentStore, assets: AssetManifest) -> Self {
        let json_ld = seo::script_json(&seo::business_json_ld(&config, catalog::site_profile()));

        Self {
            inner: Arc::new(AppStateInner {
                config,
                content,
                assets,
                json_ld,
            }),
        }
    }

    /// Load content pages and scan static assets from the configured
    /// directories.
    ///
    /// Content that fails to load is logged and the site starts without it.
    #[must_use]
    pub fn load(config: SiteConfig) -> Self {
        let content = ContentStore::load(&config.content_dir).unwrap_or_else(|e| {
            tracing::warn!(error = %e, dir = ?config.content_dir, "Content failed to load");
            ContentStore::default()
        });
        let assets = AssetManifest::scan(&config.static_dir);

        Self::new(config, content, assets)
    }

    /// Get a reference to the site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// Get a reference to the markdown content store.
    #[must_use]
    pub fn content(&self) -> &ContentStore {
        &self.inner.content
    }

    /// Get a reference to the static asset manifest.
    #[must_use]
    pub fn assets(&self) -> &AssetManifest {
        &self.inner.assets
    }

    #[must_use]
    pub fn json_ld(&self) -> &str {
        &self.inner.json_ld
    }
}
