//! Print `sitemap.xml` for a given base URL.

use std::io::Write;
use std::path::Path;

use gearbox_site::config::SiteConfig;
use gearbox_site::content::ContentStore;
use gearbox_site::seo;
use url::Url;

/// Write the sitemap for `base_url`, listing content pages found in
/// `content_dir`.
///
/// Only `base_url` affects the output, so site environment variables are
/// not read.
///
/// # Errors
///
/// Returns an error if content fails to load or writing fails.
pub fn run(
    base_url: Url,
    content_dir: &Path,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = SiteConfig::for_base_url(base_url);

    let content = ContentStore::load(content_dir)?;
    let xml = seo::sitemap(&config, &content.slugs());

    tracing::info!(base_url = %config.base_url, "Sitemap generated");
    out.write_all(xml.as_bytes())?;
    Ok(())
}
