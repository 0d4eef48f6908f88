//! # Document Catalog
//!
//! The read-only data the finder renders: an ordered list of categories and
//! the pages that belong to them. Owned by the embedding application; the
//! finder never mutates it.
//!
//! Catalogs can be loaded from JSON or TOML files. Field names follow the
//! wire format (`urlId`, `type`), mapped onto Rust names via serde.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Catalog {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub pages: Vec<Page>,
}

/// A single documentation page. Identity is `url_id`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub url_id: String,
    pub category: String,
    pub title: String,
    pub description: String,
    /// Page type (`guide`, `reference`, ...). Only used for styling.
    #[serde(rename = "type")]
    pub kind: String,
}

impl Catalog {
    pub fn new(categories: Vec<String>, pages: Vec<Page>) -> Self {
        Self { categories, pages }
    }

    /// True until pages have been supplied.
    pub fn is_loading(&self) -> bool {
        self.pages.is_empty()
    }

    /// Checks boundary invariants. Duplicate ids are rejected; pages in an
    /// unlisted category are kept but can never render.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for page in &self.pages {
            if !seen.insert(page.url_id.as_str()) {
                return Err(CatalogError::DuplicatePage(page.url_id.clone()));
            }
            if !self.categories.iter().any(|c| *c == page.category) {
                warn!(
                    "Page '{}' has unlisted category '{}'",
                    page.url_id, page.category
                );
            }
        }
        Ok(())
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Toml(toml::de::Error),
    UnsupportedFormat(String),
    DuplicatePage(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "catalog I/O error: {e}"),
            CatalogError::Json(e) => write!(f, "catalog JSON error: {e}"),
            CatalogError::Toml(e) => write!(f, "catalog TOML error: {e}"),
            CatalogError::UnsupportedFormat(ext) => {
                write!(f, "unsupported catalog format: {ext:?}")
            }
            CatalogError::DuplicatePage(id) => write!(f, "duplicate page id: {id}"),
        }
    }
}

impl std::error::Error for CatalogError {}

// ============================================================================
// Loading
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Toml,
}

impl CatalogFormat {
    /// Picks the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match ext.as_str() {
            "json" => Ok(CatalogFormat::Json),
            "toml" => Ok(CatalogFormat::Toml),
            _ => Err(CatalogError::UnsupportedFormat(ext)),
        }
    }
}

/// Parse and validate catalog contents.
pub fn parse_catalog(contents: &str, format: CatalogFormat) -> Result<Catalog, CatalogError> {
    let catalog: Catalog = match format {
        CatalogFormat::Json => serde_json::from_str(contents).map_err(CatalogError::Json)?,
        CatalogFormat::Toml => toml::from_str(contents).map_err(CatalogError::Toml)?,
    };
    catalog.validate()?;
    debug!(
        "Parsed catalog: {} categories, {} pages",
        catalog.categories.len(),
        catalog.pages.len()
    );
    Ok(catalog)
}

/// Load a catalog file from disk.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let format = CatalogFormat::from_path(path)?;
    let contents = fs::read_to_string(path).map_err(CatalogError::Io)?;
    let catalog = parse_catalog(&contents, format)?;
    info!("Loaded catalog from {}", path.display());
    Ok(catalog)
}
