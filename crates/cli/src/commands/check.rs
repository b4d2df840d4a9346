//! Verify catalog images and content pages.
//!
//! Images are resolved the same way the site resolves them at request time:
//! a missing primary falls back, a missing fallback becomes the placeholder.
//! Fallbacks are reported; placeholders fail the check.

use std::io::Write;
use std::path::Path;

use gearbox_core::ImageState;
use gearbox_core::catalog::{
    self, AVATAR_FALLBACK_IMAGE, HERO_FALLBACK_IMAGE, SERVICE_FALLBACK_IMAGE,
};
use gearbox_site::assets::AssetManifest;
use gearbox_site::content::ContentStore;

/// How one catalog image resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCheck {
    /// e.g. `service:oil-change`
    pub owner: String,
    pub primary: &'static str,
    pub state: ImageState,
}

/// Result of a full check.
#[derive(Debug, Default)]
pub struct CheckReport {
    pub images: Vec<ImageCheck>,
    pub pages: Vec<String>,
}

impl CheckReport {
    pub fn fallbacks(&self) -> impl Iterator<Item = &ImageCheck> {
        self.images
            .iter()
            .filter(|c| c.state == ImageState::Fallback)
    }

    pub fn placeholders(&self) -> impl Iterator<Item = &ImageCheck> {
        self.images
            .iter()
            .filter(|c| c.state == ImageState::Placeholder)
    }
}

/// Resolve every catalog image against `assets`.
#[must_use]
pub fn check_images(assets: &AssetManifest) -> Vec<ImageCheck> {
    let services = catalog::services().iter().map(|s| {
        (format!("service:{}", s.id), s.image, SERVICE_FALLBACK_IMAGE, s.title)
    });
    let slides = catalog::hero_slides().iter().map(|s| {
        (format!("slide:{}", s.id), s.image, HERO_FALLBACK_IMAGE, s.title)
    });
    let testimonials = catalog::testimonials().iter().map(|t| {
        (format!("testimonial:{}", t.id), t.image, AVATAR_FALLBACK_IMAGE, t.author)
    });

    services
        .chain(slides)
        .chain(testimonials)
        .map(|(owner, primary, fallback, alt)| ImageCheck {
            state: assets.resolve(primary, fallback, alt).state,
            owner,
            primary,
        })
        .collect()
}

/// Build the report without printing anything.
///
/// # Errors
///
/// Returns an error if the content directory exists but a page fails to
/// parse.
pub fn inspect(
    static_dir: &Path,
    content_dir: &Path,
) -> Result<CheckReport, Box<dyn std::error::Error>> {
    let assets = AssetManifest::scan(static_dir);
    let content = ContentStore::load(content_dir)?;

    Ok(CheckReport {
        images: check_images(&assets),
        pages: content.slugs().into_iter().map(str::to_string).collect(),
    })
}

/// Run the check and write a summary.
///
/// # Errors
///
/// Returns an error if content fails to load, if any image would show the
/// placeholder, or if writing fails.
pub fn run(
    static_dir: &Path,
    content_dir: &Path,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(?static_dir, ?content_dir, "Checking site assets");
    let report = inspect(static_dir, content_dir)?;

    for check in report.fallbacks() {
        writeln!(out, "fallback     {}  ({} missing)", check.owner, check.primary)?;
    }
    for check in report.placeholders() {
        writeln!(
            out,
            "placeholder  {}  ({} and its fallback missing)",
            check.owner, check.primary
        )?;
    }

    let fallbacks = report.fallbacks().count();
    let placeholders = report.placeholders().count();
    writeln!(
        out,
        "{} images: {} primary, {fallbacks} fallback, {placeholders} placeholder",
        report.images.len(),
        report.images.len() - fallbacks - placeholders,
    )?;
    writeln!(out, "{} content pages: {}", report.pages.len(), report.pages.join(", "))?;

    if placeholders > 0 {
        return Err(format!("{placeholders} images would show the placeholder").into());
    }
    Ok(())
}
