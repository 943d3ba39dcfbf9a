//! # Formats Module
//!
//! Catalog documents: TOML and JSON renditions of a whole catalog.
//!
//! Pure transformations only. Reading and writing files is done by the app.

mod catalog_document;

pub use catalog_document::*;
