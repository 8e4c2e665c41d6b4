//! Page catalog: where the index route gets its page collection from.
//!
//! DESIGN
//! ======
//! `PageSource` is the data-source seam behind the index view. A static
//! catalog serves a fixed, validated list (YAML file or the built-in demo);
//! the directory catalog treats every sub-directory of the pages root as a
//! page and reads its title from `index.html`.
//!
//! ERROR HANDLING
//! ==============
//! Static catalogs fail at startup on duplicate or malformed identifiers.
//! The directory catalog only fails when the root itself cannot be read; a
//! page with a missing or untitled `index.html` falls back to its identifier.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use client::state::pages::{Page, is_valid_page_id};
use serde::Deserialize;
use tracing::warn;

use crate::config::CatalogSource;

/// Preview image names looked up in each page directory, in priority order.
pub const PREVIEW_FILES: [&str; 5] = ["preview.png", "preview.jpg", "preview.jpeg", "preview.webp", "preview.svg"];

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("duplicate page id: {0}")]
    DuplicateId(String),
    #[error("invalid page id: {0:?}")]
    InvalidId(String),
}

/// Source of the page collection shown to a signed-in user.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn list_pages(&self) -> Result<Vec<Page>, CatalogError>;
}

/// Build the page source selected by configuration.
///
/// # Errors
///
/// Returns an error if a catalog file cannot be read, parsed, or validated.
pub async fn open(source: &CatalogSource) -> Result<Arc<dyn PageSource>, CatalogError> {
    Ok(match source {
        CatalogSource::File(path) => Arc::new(StaticCatalog::load(path).await?),
        CatalogSource::Directory(root) => Arc::new(DirectoryCatalog::new(root.clone())),
        CatalogSource::Demo => Arc::new(StaticCatalog::demo()),
    })
}

// =============================================================================
// STATIC CATALOG
// =============================================================================

/// On-disk format of a static catalog.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    pages: Vec<Page>,
}

/// Fixed list of pages, served in insertion order.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    pages: Vec<Page>,
}

impl StaticCatalog {
    /// # Errors
    ///
    /// Returns an error if an identifier is invalid or appears twice.
    pub fn new(pages: Vec<Page>) -> Result<Self, CatalogError> {
        validate_ids(&pages)?;
        Ok(Self { pages })
    }

    /// Built-in sample pages used when no source is configured.
    pub fn demo() -> Self {
        Self { pages: vec![Page::new("page1", "Page 1"), Page::new("page2", "Page 2")] }
    }

    /// Load a catalog from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or fails validation.
    pub async fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CatalogError::Io { path: path.to_path_buf(), source })?;
        Self::from_yaml(&raw, path)
    }

    /// Parse a catalog from YAML text; `path` is only used in errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid catalog.
    pub fn from_yaml(raw: &str, path: &Path) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            serde_yaml::from_str(raw).map_err(|source| CatalogError::Parse { path: path.to_path_buf(), source })?;
        Self::new(file.pages)
    }
}

#[async_trait]
impl PageSource for StaticCatalog {
    async fn list_pages(&self) -> Result<Vec<Page>, CatalogError> {
        Ok(self.pages.clone())
    }
}

fn validate_ids(pages: &[Page]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(pages.len());
    for page in pages {
        if !is_valid_page_id(&page.id) {
            return Err(CatalogError::InvalidId(page.id.clone()));
        }
        if !seen.insert(page.id.as_str()) {
            return Err(CatalogError::DuplicateId(page.id.clone()));
        }
    }
    Ok(())
}

// =============================================================================
// DIRECTORY CATALOG
// =============================================================================

/// One page per sub-directory of `root`, sorted by title.
#[derive(Debug, Clone)]
pub struct DirectoryCatalog {
    root: PathBuf,
}

impl DirectoryCatalog {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

#[async_trait]
impl PageSource for DirectoryCatalog {
    async fn list_pages(&self) -> Result<Vec<Page>, CatalogError> {
        let io_err = |source| CatalogError::Io { path: self.root.clone(), source };

        let mut entries = tokio::fs::read_dir(&self.root).await.map_err(io_err)?;
        let mut pages = Vec::new();

        while let Some(entry) = entries.next_entry().await.map_err(io_err)? {
            let is_dir = entry.file_type().await.map(|ft| ft.is_dir()).unwrap_or(false);
            if !is_dir {
                continue;
            }
            let Ok(id) = entry.file_name().into_string() else {
                warn!(root = %self.root.display(), "skipping non-UTF-8 page directory");
                continue;
            };
            if !is_valid_page_id(&id) {
                warn!(page = %id, "skipping page directory with invalid name");
                continue;
            }
            pages.push(read_page(id, &entry.path()).await);
        }

        sort_by_title(&mut pages);
        Ok(pages)
    }
}

async fn read_page(id: String, dir: &Path) -> Page {
    let index = dir.join("index.html");
    let title = match tokio::fs::read_to_string(&index).await {
        Ok(html) => extract_title(&html).unwrap_or_else(|| {
            warn!(page = %id, "index.html has no title; using page id");
            id.clone()
        }),
        Err(e) => {
            warn!(page = %id, error = %e, "failed to read index.html; using page id");
            id.clone()
        }
    };
    let image = find_preview(dir).await.map(|file| format!("/p/{id}/{file}"));
    Page { id, title, image }
}

/// Text of the first non-empty `<title>` element, trimmed.
pub fn extract_title(html: &str) -> Option<String> {
    let document = scraper::Html::parse_document(html);
    let selector = scraper::Selector::parse("title").ok()?;
    document
        .select(&selector)
        .map(|el| el.text().collect::<String>().trim().to_owned())
        .find(|title| !title.is_empty())
}

async fn find_preview(dir: &Path) -> Option<&'static str> {
    for name in PREVIEW_FILES {
        let is_file = tokio::fs::metadata(dir.join(name)).await.map(|m| m.is_file()).unwrap_or(false);
        if is_file {
            return Some(name);
        }
    }
    None
}

/// Case-insensitive title order, identifier as tie-breaker.
pub fn sort_by_title(pages: &mut [Page]) {
    pages.sort_by_cached_key(|page| (page.title.to_lowercase(), page.id.clone()));
}
