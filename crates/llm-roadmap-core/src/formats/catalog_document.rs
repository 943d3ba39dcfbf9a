//! # Catalog Document
//!
//! A whole catalog as a single TOML or JSON document:
//!
//! ```toml
//! version = 1
//! total_duration = "~2 hours"
//!
//! [[phases]]
//! number = 1
//! name = "Foundation"
//! icon = "🎯"
//! color = "#6366f1"
//!
//! [[stages]]
//! id = 1
//! slug = "research-vision"
//! phase_number = 1
//! # ...
//! ```
//!
//! Loading a document goes through [`StageCatalog::new`], so a file can
//! never produce a catalog the built-in data could not.
//!
//! ## Limits
//!
//! Documents larger than `MAX_CATALOG_DOCUMENT_SIZE` are rejected before
//! parsing, and the format version is checked before the catalog is built.

use crate::primitives::{CATALOG_FORMAT_VERSION, MAX_CATALOG_DOCUMENT_SIZE};
use crate::{Phase, RoadmapError, Stage, StageCatalog};
use serde::{Deserialize, Serialize};
use std::path::Path;

// =============================================================================
// FORMAT SELECTION
// =============================================================================

/// Text encoding of a catalog document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Toml,
    Json,
}

impl CatalogFormat {
    /// Pick the format from a file extension (`.toml` or `.json`).
    pub fn from_path(path: &Path) -> Result<Self, RoadmapError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("toml") => Ok(CatalogFormat::Toml),
            Some("json") => Ok(CatalogFormat::Json),
            _ => Err(RoadmapError::DeserializationError(format!(
                "Cannot infer catalog format from '{}' (expected .toml or .json)",
                path.display()
            ))),
        }
    }

    /// Parse a format name as given on the command line.
    pub fn from_name(name: &str) -> Result<Self, RoadmapError> {
        match name {
            "toml" => Ok(CatalogFormat::Toml),
            "json" => Ok(CatalogFormat::Json),
            other => Err(RoadmapError::SerializationError(format!(
                "Unknown catalog format: {}",
                other
            ))),
        }
    }
}

// =============================================================================
// DOCUMENT
// =============================================================================

/// Serializable form of a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogDocument {
    pub version: u32,
    #[serde(default)]
    pub total_duration: String,
    pub phases: Vec<Phase>,
    pub stages: Vec<Stage>,
}

impl CatalogDocument {
    /// Snapshot a catalog.
    #[must_use]
    pub fn from_catalog(catalog: &StageCatalog) -> Self {
        Self {
            version: CATALOG_FORMAT_VERSION,
            total_duration: catalog.total_duration().to_string(),
            phases: catalog.phases().to_vec(),
            stages: catalog.stages().to_vec(),
        }
    }

    /// Check the version and build a validated catalog.
    pub fn into_catalog(self) -> Result<StageCatalog, RoadmapError> {
        if self.version != CATALOG_FORMAT_VERSION {
            return Err(RoadmapError::DeserializationError(format!(
                "Unsupported catalog version: {} (expected {})",
                self.version, CATALOG_FORMAT_VERSION
            )));
        }
        StageCatalog::new(self.phases, self.stages, self.total_duration)
    }
}

// =============================================================================
// SERIALIZATION FUNCTIONS
// =============================================================================

/// Render a catalog as a document.
///
/// This is a pure transformation - no file I/O.
pub fn catalog_to_string(
    catalog: &StageCatalog,
    format: CatalogFormat,
) -> Result<String, RoadmapError> {
    let document = CatalogDocument::from_catalog(catalog);

    match format {
        CatalogFormat::Toml => toml::to_string(&document)
            .map_err(|e| RoadmapError::SerializationError(e.to_string())),
        CatalogFormat::Json => serde_json::to_string_pretty(&document)
            .map_err(|e| RoadmapError::SerializationError(e.to_string())),
    }
}

/// Parse and validate a catalog document.
///
/// This is a pure transformation - no file I/O.
pub fn catalog_from_str(text: &str, format: CatalogFormat) -> Result<StageCatalog, RoadmapError> {
    if text.len() > MAX_CATALOG_DOCUMENT_SIZE {
        return Err(RoadmapError::DeserializationError(format!(
            "Document size {} bytes exceeds maximum allowed {} bytes",
            text.len(),
            MAX_CATALOG_DOCUMENT_SIZE
        )));
    }

    let document: CatalogDocument = match format {
        CatalogFormat::Toml => toml::from_str(text)
            .map_err(|e| RoadmapError::DeserializationError(e.to_string()))?,
        CatalogFormat::Json => serde_json::from_str(text)
            .map_err(|e| RoadmapError::DeserializationError(e.to_string()))?,
    };

    document.into_catalog()
}

// =============================================================================
// TESTS
// =============================================================================
