//! # Navigation
//!
//! Per-stage view used by a navigation header: where you are, what comes
//! before and after, and how far along the curriculum that is.

use crate::{Phase, Progress, Stage};
use serde::Serialize;

/// Navigation context for one stage, borrowed from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Navigation<'a> {
    pub current: &'a Stage,
    pub phase: &'a Phase,
    /// `None` on the first stage.
    pub previous: Option<&'a Stage>,
    /// `None` on the last stage.
    pub next: Option<&'a Stage>,
    pub progress: Progress,
}

impl Navigation<'_> {
    /// True on the last stage, where "next" becomes "complete".
    #[must_use]
    pub fn is_final(&self) -> bool {
        self.next.is_none()
    }

    /// True on the first stage, where "previous" is disabled.
    #[must_use]
    pub fn is_first(&self) -> bool {
        self.previous.is_none()
    }
}

#[cfg(test)]
mod tests {
    use crate::StageCatalog;

    #[test]
    fn interior_stage_has_both_neighbours() {
        let catalog = StageCatalog::builtin().expect("builtin");
        let nav = catalog.navigation("tokenization").expect("nav");

        assert_eq!(nav.previous.map(|s| s.id.value()), Some(4));
        assert_eq!(nav.next.map(|s| s.id.value()), Some(6));
        assert_eq!(nav.progress.basis_points(), 3125);
        assert!(!nav.is_first());
        assert!(!nav.is_final());
    }

    #[test]
    fn first_stage_has_no_previous() {
        let catalog = StageCatalog::builtin().expect("builtin");
        let nav = catalog.navigation("research-vision").expect("nav");
        assert!(nav.is_first());
        assert_eq!(nav.phase.name, "Foundation");
    }
}
