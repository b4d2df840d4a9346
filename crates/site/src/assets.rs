//! Static asset manifest and image resolution.
//!
//! The static directory is scanned once at startup. Image references in the
//! catalog are then resolved through [`ImageFallback`]: a primary that is
//! not on disk counts as a load failure and the fallback is tried, then the
//! placeholder. The browser script repeats the same steps for runtime
//! failures using the `data-fallback` attribute.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use gearbox_core::{ImageFallback, ImageState};
use serde::Serialize;

/// URL prefix the static directory is served under.
pub const STATIC_PREFIX: &str = "/static/";

/// An image ready for a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageView {
    /// Source to render, empty when showing the placeholder.
    pub src: String,
    /// Source for the client to swap to if `src` fails in the browser.
    pub fallback: Option<String>,
    pub alt: String,
    pub state: ImageState,
}

impl ImageView {
    /// Whether the "image unavailable" placeholder should be shown.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.state == ImageState::Placeholder
    }
}

/// Set of files available under `/static`.
#[derive(Debug, Clone, Default)]
pub struct AssetManifest {
    files: Arc<HashSet<String>>,
}

impl AssetManifest {
    /// Scan `static_dir` recursively. A missing directory gives an empty
    /// manifest.
    #[must_use]
    pub fn scan(static_dir: &Path) -> Self {
        let mut files = HashSet::new();
        if static_dir.is_dir() {
            collect(static_dir, static_dir, &mut files);
        } else {
            tracing::warn!("Static directory does not exist: {:?}", static_dir);
        }
        tracing::info!(count = files.len(), "Static asset manifest built");
        Self {
            files: Arc::new(files),
        }
    }

    /// Build a manifest from known URL paths (e.g. `/static/css/main.css`).
    #[must_use]
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let files = paths
            .into_iter()
            .filter_map(|p| p.as_ref().strip_prefix(STATIC_PREFIX).map(str::to_string))
            .collect();
        Self {
            files: Arc::new(files),
        }
    }

    /// Number of files known.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Whether a URL is expected to load.
    ///
    /// Remote URLs are assumed to exist; `/static/...` paths must be in the
    /// manifest; anything else is treated as missing.
    #[must_use]
    pub fn contains(&self, url: &str) -> bool {
        if url.starts_with("https://") || url.starts_with("http://") {
            return true;
        }
        url.strip_prefix(STATIC_PREFIX)
            .is_some_and(|rel| self.files.contains(rel))
    }

    /// Resolve an image reference to what should be rendered.
    #[must_use]
    pub fn resolve(&self, primary: &str, fallback: &str, alt: &str) -> ImageView {
        let mut image = ImageFallback::new(primary, fallback);
        let state = image.resolve(|src| self.contains(src));

        if state != ImageState::Primary {
            tracing::debug!(primary, ?state, "Image resolved away from primary");
        }

        // Only a primary still has somewhere to fall back to in the browser.
        let client_fallback = state == ImageState::Primary
            && fallback != primary
            && self.contains(fallback);

        ImageView {
            src: image.current_src().unwrap_or_default().to_string(),
            fallback: client_fallback.then(|| fallback.to_string()),
            alt: alt.to_string(),
            state,
        }
    }
}

fn collect(root: &Path, dir: &Path, files: &mut HashSet<String>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        tracing::warn!("Failed to read static directory {:?}", dir);
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(root, &path, files);
        } else if let Ok(rel) = path.strip_prefix(root) {
            let rel = rel
                .components()
                .filter_map(|c| c.as_os_str().to_str())
                .collect::<Vec<_>>()
                .join("/");
            files.insert(rel);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest() -> AssetManifest {
        AssetManifest::from_paths([
            "/static/images/hero/shop.jpg",
            "/static/images/fallback/hero.svg",
        ])
    }

    #[test]
    fn test_primary_present() {
        let view = manifest().resolve(
            "/static/images/hero/shop.jpg",
            "/static/images/fallback/hero.svg",
            "Shop floor",
        );
        assert_eq!(view.state, ImageState::Primary);
        assert_eq!(view.src, "/static/images/hero/shop.jpg");
        assert_eq!(view.fallback.as_deref(), Some("/static/images/fallback/hero.svg"));
        assert_eq!(view.alt, "Shop floor");
    }

    #[test]
    fn test_missing_primary_uses_fallback() {
        let view = manifest().resolve(
            "/static/images/hero/missing.jpg",
            "/static/images/fallback/hero.svg",
            "",
        );
        assert_eq!(view.state, ImageState::Fallback);
        assert_eq!(view.src, "/static/images/fallback/hero.svg");
        assert!(view.fallback.is_none());
    }

    #[test]
    fn test_both_missing_gives_placeholder() {
        let view = manifest().resolve("/static/a.jpg", "/static/b.svg", "");
        assert!(view.is_placeholder());
        assert!(view.src.is_empty());
        assert!(view.fallback.is_none());
    }

    #[test]
    fn test_remote_urls_assumed_present() {
        let m = AssetManifest::default();
        assert!(m.contains("https://cdn.example.com/x.jpg"));
        assert!(!m.contains("/static/x.jpg"));
        assert!(!m.contains("/elsewhere/x.jpg"));
    }

    #[test]
    fn test_scan_checked_in_static_dir() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("static");
        let m = AssetManifest::scan(&dir);
        assert!(m.contains("/static/css/main.css"));
        assert!(m.contains(gearbox_core::catalog::SERVICE_FALLBACK_IMAGE));
        assert!(m.contains(gearbox_core::catalog::HERO_FALLBACK_IMAGE));
        assert!(m.contains(gearbox_core::catalog::AVATAR_FALLBACK_IMAGE));
    }

    #[test]
    fn test_scan_missing_dir() {
        assert!(AssetManifest::scan(Path::new("/definitely/not/here")).is_empty());
    }
}
