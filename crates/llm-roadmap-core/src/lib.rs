//! # llm-roadmap-core
//!
//! The stage catalog of the LLM roadmap curriculum - THE CATALOG.
//!
//! This crate holds the immutable, ordered registry of the curriculum's
//! stages, grouped into phases, and the pure queries the rest of the
//! application is built on: lookup by slug, listing by phase, next/previous
//! in canonical order, and progress through the sequence.
//!
//! ## Architectural Constraints
//!
//! - The registry is validated once at construction and never mutated
//! - Misses are data: `Option` or an empty list, never an error
//! - No async, no network, no file I/O (pure Rust)
//!
//! ## Example
//!
//! ```
//! use llm_roadmap_core::StageCatalog;
//!
//! let catalog = StageCatalog::builtin().expect("built-in catalog is valid");
//! let next = catalog.next_stage("tokenization").map(|s| s.slug.as_str());
//! assert_eq!(next, Some("transformer-architecture"));
//! assert_eq!(catalog.stage_progress("tokenization").basis_points(), 3125);
//! ```

// =============================================================================
// MODULES
// =============================================================================

pub mod catalog;
pub mod curriculum;
pub mod formats;
pub mod navigation;
pub mod primitives;
pub mod progress;
pub mod roadmap;
pub mod types;
pub mod validation;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{Difficulty, Phase, PhaseNumber, RoadmapError, Stage, StageId};

// =============================================================================
// RE-EXPORTS: Catalog & Queries
// =============================================================================

pub use catalog::{Adjacency, Direction, StageCatalog, shared};
pub use navigation::Navigation;
pub use progress::Progress;
pub use roadmap::{PhaseGroup, Roadmap, RoadmapSummary};
pub use validation::Validator;

// =============================================================================
// RE-EXPORTS: Formats (from formats module)
// =============================================================================

pub use formats::{CatalogDocument, CatalogFormat, catalog_from_str, catalog_to_string};
