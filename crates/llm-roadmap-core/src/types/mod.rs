//! # Core Type Definitions
//!
//! This module contains all record types of the roadmap catalog:
//! - Identifiers (`StageId`, `PhaseNumber`)
//! - Records (`Phase`, `Stage`, `Difficulty`)
//! - Error types (`RoadmapError`)
//!
//! ## Immutability
//!
//! Records are plain data. Once handed to a [`crate::StageCatalog`] they are
//! only ever exposed by shared reference, so nothing downstream can mutate
//! the registry.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// Canonical position of a stage in the curriculum (1..N).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StageId(pub u32);

impl StageId {
    /// Get the raw id value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for StageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display/sort number of a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhaseNumber(pub u32);

impl PhaseNumber {
    /// Get the raw phase number.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PhaseNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// DIFFICULTY
// =============================================================================

/// How demanding a stage is. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// All difficulties, easiest first.
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    /// Lowercase label, as used in catalog files and the API.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = RoadmapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| RoadmapError::DeserializationError(format!("Unknown difficulty: {s}")))
    }
}

// =============================================================================
// PHASE
// =============================================================================

/// A named grouping of consecutive stages, used for display organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    pub number: PhaseNumber,
    pub name: String,
    /// Presentation metadata, opaque.
    pub icon: String,
    /// Presentation metadata, opaque.
    pub color: String,
}

impl Phase {
    /// Create a new phase.
    #[must_use]
    pub fn new(
        number: u32,
        name: impl Into<String>,
        icon: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            number: PhaseNumber(number),
            name: name.into(),
            icon: icon.into(),
            color: color.into(),
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Phase {}: {}", self.number, self.name)
    }
}

// =============================================================================
// STAGE
// =============================================================================

/// One lesson of the curriculum; the atomic navigable entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    pub id: StageId,
    /// URL-safe external lookup key.
    pub slug: String,
    pub phase_number: PhaseNumber,
    pub icon: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub color: String,
    /// Free-text estimate such as `~8 min`. Never parsed.
    pub duration: String,
    pub difficulty: Difficulty,
    /// Display order matters; duplicates are allowed.
    #[serde(default)]
    pub key_topics: Vec<String>,
}

impl Stage {
    /// Check whether the stage belongs to the given phase.
    #[must_use]
    pub fn in_phase(&self, phase: PhaseNumber) -> bool {
        self.phase_number == phase
    }

    /// Case-insensitive match of an already lowercased term against the
    /// title, subtitle, slug and key topics.
    pub(crate) fn matches_lowercase(&self, term: &str) -> bool {
        self.title.to_lowercase().contains(term)
            || self.subtitle.to_lowercase().contains(term)
            || self.slug.contains(term)
            || self
                .key_topics
                .iter()
                .any(|topic| topic.to_lowercase().contains(term))
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon, self.title)
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while building or loading a catalog.
///
/// Catalog queries never return these: a lookup miss is `None` and an
/// unknown phase is an empty list. Only construction (and the app shell
/// around it) is fallible.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoadmapError {
    /// The catalog has no stages at all.
    #[error("Catalog contains no stages")]
    EmptyCatalog,

    /// The catalog exceeds the stage limit.
    #[error("Catalog has {count} stages, maximum is {max}")]
    TooManyStages { count: usize, max: usize },

    /// Stage ids do not run 1..N in registry order.
    #[error("Stage at position {position} has id {found}, expected {expected}")]
    NonContiguousId {
        position: usize,
        expected: StageId,
        found: StageId,
    },

    /// Two stages share a slug.
    #[error("Duplicate stage slug: {0}")]
    DuplicateSlug(String),

    /// A slug is empty, too long, or not URL-safe.
    #[error("Invalid stage slug: {0:?}")]
    InvalidSlug(String),

    /// A stage references a phase that does not exist.
    #[error("Stage {stage} references unknown phase {phase}")]
    UnknownPhase { stage: StageId, phase: PhaseNumber },

    /// Two phases share a number.
    #[error("Duplicate phase number: {0}")]
    DuplicatePhase(PhaseNumber),

    /// Phase numbers must be positive and listed in ascending order.
    #[error("Phase {0} is out of order (numbers must be positive and ascending)")]
    PhaseOrder(PhaseNumber),

    /// A phase has no stages.
    #[error("Phase {0} has no stages")]
    EmptyPhase(PhaseNumber),

    /// A stage goes back to an earlier phase, so phase groups are not consecutive.
    #[error("Stage {stage} moves back to phase {phase}")]
    PhaseInterleaved { stage: StageId, phase: PhaseNumber },

    /// A required text field is empty.
    #[error("Empty field `{field}` on {owner}")]
    EmptyField { owner: String, field: &'static str },

    /// Raised by consumers that turn a lookup miss into a user-facing failure.
    #[error("Stage not found: {0}")]
    StageNotFound(String),

    /// A serialization error occurred.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// A deserialization error occurred.
    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),
}

// =============================================================================
// TESTS
// =============================================================================
