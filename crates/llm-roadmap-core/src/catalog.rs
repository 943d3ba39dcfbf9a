//! # Stage Catalog
//!
//! The immutable, ordered registry of stages grouped into phases.
//!
//! ## Canonical Order
//!
//! Stages are stored in ascending id order (1..N). That order, not the phase
//! grouping, defines next/previous: moving from the last stage of phase K to
//! the first stage of phase K+1 is an ordinary "next".
//!
//! ## Lookup Semantics
//!
//! | Query              | Miss                        |
//! |--------------------|-----------------------------|
//! | `stage_by_slug`    | `None`                      |
//! | `stages_by_phase`  | empty `Vec`                 |
//! | `next_stage`       | `None` (unknown or last)    |
//! | `previous_stage`   | `None` (unknown or first)   |
//! | `stage_progress`   | `Progress::none`            |
//!
//! All queries are pure and total. The catalog is `Send + Sync`; after
//! construction nothing can mutate it.

use crate::curriculum::{TOTAL_DURATION, builtin_phases, builtin_stages};
use crate::primitives::MAX_SEARCH_TERM_LENGTH;
use crate::validation::Validator;
use crate::{Navigation, Phase, PhaseNumber, Progress, RoadmapError, Stage};
use std::collections::BTreeMap;
use std::sync::OnceLock;

// =============================================================================
// ADJACENCY
// =============================================================================

/// Direction of travel through the canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Outcome of an adjacency lookup, keeping the two miss reasons apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjacency<'a> {
    /// The neighbouring stage.
    Found(&'a Stage),
    /// The slug matched no stage.
    UnknownSlug,
    /// The slug matched the first (or last) stage, so there is no neighbour.
    Boundary,
}

impl<'a> Adjacency<'a> {
    /// Collapse both miss reasons into `None`.
    #[must_use]
    pub fn stage(self) -> Option<&'a Stage> {
        match self {
            Adjacency::Found(stage) => Some(stage),
            Adjacency::UnknownSlug | Adjacency::Boundary => None,
        }
    }
}

// =============================================================================
// STAGE CATALOG
// =============================================================================

/// Read-only registry of phases and stages with derived navigation queries.
#[derive(Debug, Clone)]
pub struct StageCatalog {
    phases: Vec<Phase>,
    stages: Vec<Stage>,
    total_duration: String,
    /// slug -> canonical index
    slug_index: BTreeMap<String, usize>,
    /// phase -> canonical indexes, ascending
    phase_index: BTreeMap<PhaseNumber, Vec<usize>>,
}

impl StageCatalog {
    /// Validate the raw lists and build the catalog with its indexes.
    pub fn new(
        phases: Vec<Phase>,
        stages: Vec<Stage>,
        total_duration: impl Into<String>,
    ) -> Result<Self, RoadmapError> {
        Validator::validate_phases(&phases)?;
        Validator::validate_stages(&stages, &phases)?;

        let mut slug_index = BTreeMap::new();
        let mut phase_index: BTreeMap<PhaseNumber, Vec<usize>> = BTreeMap::new();
        for (index, stage) in stages.iter().enumerate() {
            slug_index.insert(stage.slug.clone(), index);
            phase_index.entry(stage.phase_number).or_default().push(index);
        }

        Ok(Self {
            phases,
            stages,
            total_duration: total_duration.into(),
            slug_index,
            phase_index,
        })
    }

    /// Build the 16-stage, 8-phase built-in curriculum.
    pub fn builtin() -> Result<Self, RoadmapError> {
        Self::new(builtin_phases(), builtin_stages(), TOTAL_DURATION)
    }

    // -------------------------------------------------------------------------
    // Listing
    // -------------------------------------------------------------------------

    /// All stages in canonical order.
    #[must_use]
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// All phases in ascending number order.
    #[must_use]
    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    /// Total number of stages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Always false for a constructed catalog; present for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Overall time estimate, free text.
    #[must_use]
    pub fn total_duration(&self) -> &str {
        &self.total_duration
    }

    /// The entry point of the curriculum.
    #[must_use]
    pub fn first_stage(&self) -> Option<&Stage> {
        self.stages.first()
    }

    /// The final stage of the curriculum.
    #[must_use]
    pub fn last_stage(&self) -> Option<&Stage> {
        self.stages.last()
    }

    // -------------------------------------------------------------------------
    // Lookup
    // -------------------------------------------------------------------------

    /// Zero-based canonical index of a slug.
    #[must_use]
    pub fn index_of(&self, slug: &str) -> Option<usize> {
        self.slug_index.get(slug).copied()
    }

    /// The stage with exactly this slug (case-sensitive).
    #[must_use]
    pub fn stage_by_slug(&self, slug: &str) -> Option<&Stage> {
        self.index_of(slug).and_then(|i| self.stages.get(i))
    }

    /// The phase with this number.
    #[must_use]
    pub fn phase(&self, number: PhaseNumber) -> Option<&Phase> {
        self.phases.iter().find(|p| p.number == number)
    }

    /// The phase a stage belongs to.
    #[must_use]
    pub fn phase_of(&self, stage: &Stage) -> Option<&Phase> {
        self.phase(stage.phase_number)
    }

    /// Stages of one phase in ascending id order.
    ///
    /// Any integer is accepted; unknown, zero or negative numbers give an
    /// empty list.
    #[must_use]
    pub fn stages_by_phase(&self, phase_number: i64) -> Vec<&Stage> {
        let Ok(number) = u32::try_from(phase_number) else {
            return Vec::new();
        };

        self.phase_index
            .get(&PhaseNumber(number))
            .map(|indexes| {
                indexes
                    .iter()
                    .filter_map(|&i| self.stages.get(i))
                    .collect()
            })
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Adjacency
    // -------------------------------------------------------------------------

    /// Neighbour of a stage in canonical order, with the miss reason kept.
    #[must_use]
    pub fn adjacent(&self, slug: &str, direction: Direction) -> Adjacency<'_> {
        let Some(index) = self.index_of(slug) else {
            return Adjacency::UnknownSlug;
        };

        let neighbour = match direction {
            Direction::Next => index.checked_add(1),
            Direction::Previous => index.checked_sub(1),
        };

        match neighbour.and_then(|i| self.stages.get(i)) {
            Some(stage) => Adjacency::Found(stage),
            None => Adjacency::Boundary,
        }
    }

    /// The stage after `slug`, crossing phase boundaries.
    #[must_use]
    pub fn next_stage(&self, slug: &str) -> Option<&Stage> {
        self.adjacent(slug, Direction::Next).stage()
    }

    /// The stage before `slug`, crossing phase boundaries.
    #[must_use]
    pub fn previous_stage(&self, slug: &str) -> Option<&Stage> {
        self.adjacent(slug, Direction::Previous).stage()
    }

    // -------------------------------------------------------------------------
    // Progress & navigation
    // -------------------------------------------------------------------------

    /// `(index + 1) / total`, or the zero sentinel for an unknown slug.
    #[must_use]
    pub fn stage_progress(&self, slug: &str) -> Progress {
        match self.index_of(slug) {
            Some(index) => Progress::new(index.saturating_add(1), self.len()),
            None => Progress::none(self.len()),
        }
    }

    /// Everything a navigation header needs for one stage.
    #[must_use]
    pub fn navigation(&self, slug: &str) -> Option<Navigation<'_>> {
        let current = self.stage_by_slug(slug)?;
        let phase = self.phase_of(current)?;

        Some(Navigation {
            current,
            phase,
            previous: self.previous_stage(slug),
            next: self.next_stage(slug),
            progress: self.stage_progress(slug),
        })
    }

    /// Stages whose title, subtitle, slug or key topics contain `term`,
    /// case-insensitively, in canonical order.
    ///
    /// A blank or over-long term matches nothing.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&Stage> {
        let term = term.trim();
        if term.is_empty() || term.len() > MAX_SEARCH_TERM_LENGTH {
            return Vec::new();
        }

        let needle = term.to_lowercase();
        self.stages
            .iter()
            .filter(|s| s.matches_lowercase(&needle))
            .collect()
    }
}

// =============================================================================
// SHARED INSTANCE
// =============================================================================

static SHARED: OnceLock<Result<StageCatalog, RoadmapError>> = OnceLock::new();

/// The built-in catalog, built at most once per process.
pub fn shared() -> Result<&'static StageCatalog, RoadmapError> {
    SHARED
        .get_or_init(StageCatalog::builtin)
        .as_ref()
        .map_err(Clone::clone)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Difficulty, StageId};

    fn catalog() -> StageCatalog {
        StageCatalog::builtin().expect("builtin catalog")
    }

    #[test]
    fn builtin_has_sixteen_stages_in_eight_phases() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 16);
        assert_eq!(catalog.phases().len(), 8);
        assert_eq!(catalog.total_duration(), "~2 hours");
    }

    #[test]
    fn lookup_tokenization() {
        let catalog = catalog();
        let stage = catalog.stage_by_slug("tokenization").expect("tokenization");
        assert_eq!(stage.id, StageId(5));
        assert_eq!(stage.phase_number, PhaseNumber(2));
        assert_eq!(stage.difficulty, Difficulty::Intermediate);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let catalog = catalog();
        assert!(catalog.stage_by_slug("Tokenization").is_none());
        assert!(catalog.stage_by_slug("tokenization ").is_none());
        assert!(catalog.stage_by_slug("nonexistent-slug").is_none());
    }

    #[test]
    fn adjacency_keeps_miss_reason() {
        let catalog = catalog();
        assert_eq!(
            catalog.adjacent("nope", Direction::Next),
            Adjacency::UnknownSlug
        );
        assert_eq!(
            catalog.adjacent("continuous-learning", Direction::Next),
            Adjacency::Boundary
        );
        assert_eq!(
            catalog.adjacent("research-vision", Direction::Previous),
            Adjacency::Boundary
        );
        assert!(matches!(
            catalog.adjacent("tokenization", Direction::Next),
            Adjacency::Found(s) if s.slug == "transformer-architecture"
        ));
    }

    #[test]
    fn next_crosses_phase_boundary() {
        let catalog = catalog();
        let next = catalog.next_stage("architecture-planning").expect("next");
        assert_eq!(next.slug, "data-collection");
        assert_eq!(next.phase_number, PhaseNumber(2));
    }

    #[test]
    fn stages_by_phase_handles_any_integer() {
        let catalog = catalog();
        let ids: Vec<u32> = catalog
            .stages_by_phase(2)
            .iter()
            .map(|s| s.id.value())
            .collect();
        assert_eq!(ids, vec![3, 4, 5]);

        assert!(catalog.stages_by_phase(0).is_empty());
        assert!(catalog.stages_by_phase(-3).is_empty());
        assert!(catalog.stages_by_phase(99).is_empty());
        assert!(catalog.stages_by_phase(i64::MAX).is_empty());
    }

    #[test]
    fn navigation_for_last_stage() {
        let catalog = catalog();
        let nav = catalog.navigation("continuous-learning").expect("nav");
        assert!(nav.next.is_none());
        assert_eq!(
            nav.previous.map(|s| s.slug.as_str()),
            Some("deployment-serving")
        );
        assert_eq!(nav.phase.name, "Operations");
        assert!(nav.is_final());
        assert!(catalog.navigation("missing").is_none());
    }

    #[test]
    fn search_matches_topics_case_insensitively() {
        let catalog = catalog();
        let slugs: Vec<&str> = catalog
            .search("ATTENTION")
            .iter()
            .map(|s| s.slug.as_str())
            .collect();
        assert_eq!(slugs, vec!["transformer-architecture", "modern-innovations"]);

        assert!(catalog.search("   ").is_empty());
        assert!(catalog.search(&"x".repeat(MAX_SEARCH_TERM_LENGTH + 1)).is_empty());
    }

    #[test]
    fn shared_is_built_once() {
        let a = shared().expect("shared");
        let b = shared().expect("shared");
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.len(), 16);
    }

    #[test]
    fn first_and_last() {
        let catalog = catalog();
        assert_eq!(
            catalog.first_stage().map(|s| s.slug.as_str()),
            Some("research-vision")
        );
        assert_eq!(
            catalog.last_stage().map(|s| s.slug.as_str()),
            Some("continuous-learning")
        );
    }

    #[test]
    fn duplicate_slug_rejected() {
        let mut stages = builtin_stages();
        stages[1].slug = "research-vision".to_string();

        let err = StageCatalog::new(builtin_phases(), stages, TOTAL_DURATION)
            .expect_err("duplicate slug");
        assert_eq!(err, RoadmapError::DuplicateSlug("research-vision".to_string()));
    }
}
