//! Markdown content pages (about, privacy, terms).
//!
//! Pages are loaded from `<content_dir>/pages/*.md` at startup. Each file
//! starts with YAML frontmatter:
//!
//! ```markdown
//! ---
//! title: Privacy Policy
//! description: How we handle the information you send us.
//! updated_at: 2025-01-15
//! ---
//! Body in **markdown**.
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;
use comrak::{Options, markdown_to_html};
use gray_matter::{Matter, ParsedEntity, engine::YAML};
use serde::Deserialize;

/// Frontmatter metadata for a page.
#[derive(Debug, Clone, Deserialize)]
pub struct PageMeta {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub updated_at: Option<NaiveDate>,
}

/// A rendered page with metadata and HTML content.
#[derive(Debug, Clone)]
pub struct Page {
    pub slug: String,
    pub meta: PageMeta,
    pub content_html: String,
}

/// Errors loading content.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// All loaded pages, held in memory.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    pages: Arc<HashMap<String, Page>>,
}

impl ContentStore {
    /// Load all content from the filesystem.
    ///
    /// A missing `pages` directory yields an empty store. Files that fail to
    /// parse are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the pages directory exists but cannot be read.
    pub fn load(content_dir: &Path) -> Result<Self, ContentError> {
        let pages = Self::load_pages(&content_dir.join("pages"))?;
        Ok(Self {
            pages: Arc::new(pages),
        })
    }

    fn load_pages(dir: &Path) -> Result<HashMap<String, Page>, ContentError> {
        let mut pages = HashMap::new();

        if !dir.exists() {
            tracing::warn!("Pages directory does not exist: {:?}", dir);
            return Ok(pages);
        }

        let entries = std::fs::read_dir(dir).map_err(|e| ContentError::Io(e.to_string()))?;

        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "md") {
                match Self::load_page(&path) {
                    Ok(page) => {
                        tracing::info!("Loaded page: {}", page.slug);
                        pages.insert(page.slug.clone(), page);
                    }
                    Err(e) => {
                        tracing::error!("Failed to load page {:?}: {}", path, e);
                    }
                }
            }
        }

        Ok(pages)
    }

    /// Load a single page from a markdown file.
    fn load_page(path: &Path) -> Result<Page, ContentError> {
        let content = std::fs::read_to_string(path).map_err(|e| ContentError::Io(e.to_string()))?;

        let slug = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| ContentError::Parse("Invalid filename".to_string()))?
            .to_string();

        parse_page(slug, &content)
    }

    /// Get a page by slug.
    #[must_use]
    pub fn get_page(&self, slug: &str) -> Option<&Page> {
        self.pages.get(slug)
    }

    /// Slugs of every loaded page, sorted.
    #[must_use]
    pub fn slugs(&self) -> Vec<&str> {
        let mut slugs: Vec<&str> = self.pages.keys().map(String::as_str).collect();
        slugs.sort_unstable();
        slugs
    }
}

/// Parse frontmatter and render the markdown body of one page.
fn parse_page(slug: String, source: &str) -> Result<Page, ContentError> {
    let matter = Matter::<YAML>::new();
    let parsed: ParsedEntity<PageMeta> = matter
        .parse(source)
        .map_err(|e| ContentError::Parse(format!("Failed to parse frontmatter: {e}")))?;
    let meta = parsed
        .data
        .ok_or_else(|| ContentError::Parse("Missing frontmatter".to_string()))?;

    Ok(Page {
        slug,
        meta,
        content_html: render_markdown(&parsed.content),
    })
}

/// Render markdown to HTML. Raw HTML in the source is escaped.
fn render_markdown(source: &str) -> String {
    let mut options = Options::default();
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.strikethrough = true;
    options.render.escape = true;
    markdown_to_html(source, &options)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page() {
        let source = "---\ntitle: Terms\ndescription: The fine print\nupdated_at: 2025-01-15\n---\n# Heading\n\nSome **bold** text.\n";
        let page = parse_page("terms".to_string(), source).unwrap();
        assert_eq!(page.meta.title, "Terms");
        assert_eq!(page.meta.description.as_deref(), Some("The fine print"));
        assert_eq!(
            page.meta.updated_at,
            NaiveDate::from_ymd_opt(2025, 1, 15)
        );
        assert!(page.content_html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_missing_frontmatter() {
        let result = parse_page("x".to_string(), "# Just markdown\n");
        assert!(matches!(result, Err(ContentError::Parse(_))));
    }

    #[test]
    fn test_raw_html_escaped() {
        let html = render_markdown("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let store = ContentStore::load(Path::new("/definitely/not/here")).unwrap();
        assert!(store.slugs().is_empty());
        assert!(store.get_page("about").is_none());
    }

    #[test]
    fn test_loads_checked_in_pages() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("content");
        let store = ContentStore::load(&dir).unwrap();
        for slug in ["about", "privacy", "terms"] {
            assert!(store.get_page(slug).is_some(), "missing page {slug}");
        }
    }
}
