//! # Catalog Primitives
//!
//! Hardcoded limits and constants for the roadmap catalog.
//!
//! These are compiled into the binary and immutable at runtime. They bound
//! what a custom catalog file may contain; the built-in curriculum sits far
//! below every limit.

/// Current catalog document format version.
///
/// Increment this when making breaking changes to the catalog file layout.
pub const CATALOG_FORMAT_VERSION: u32 = 1;

/// Maximum number of stages in one catalog.
pub const MAX_STAGES: usize = 1024;

/// Maximum length of a stage slug, in bytes.
pub const MAX_SLUG_LENGTH: usize = 64;

/// Maximum size of a catalog document accepted for parsing (1 MiB).
///
/// Checked before any parsing happens.
pub const MAX_CATALOG_DOCUMENT_SIZE: usize = 1024 * 1024;

/// Maximum length of a search term, in bytes.
pub const MAX_SEARCH_TERM_LENGTH: usize = 128;

/// Denominator of [`crate::Progress::basis_points`]: 10_000 = 100%.
pub const BASIS_POINTS_SCALE: u32 = 10_000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basis_points_scale_is_hundred_percent() {
        assert_eq!(BASIS_POINTS_SCALE, 100 * 100);
    }

    #[test]
    fn slug_limit_fits_document_limit() {
        assert!(MAX_SLUG_LENGTH < MAX_CATALOG_DOCUMENT_SIZE);
    }
}
