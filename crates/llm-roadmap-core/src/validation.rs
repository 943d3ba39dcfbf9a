//! # Validation Module
//!
//! Registry invariants, checked once before a catalog is built.
//!
//! - Phase numbers are positive, unique and ascending
//! - Stage ids run 1..N in registry order
//! - Slugs are unique and URL-safe
//! - Every stage references an existing phase, and phases form consecutive
//!   runs of stages
//! - Descriptive text is never empty

use crate::primitives::{MAX_SLUG_LENGTH, MAX_STAGES};
use crate::{Phase, PhaseNumber, RoadmapError, Stage, StageId};
use std::collections::BTreeSet;

/// The Validator checks raw phase/stage lists against the registry invariants.
pub struct Validator;

impl Validator {
    /// Validate a slug.
    ///
    /// A slug is valid if it is non-empty, at most `MAX_SLUG_LENGTH` bytes,
    /// made of `[a-z0-9-]`, and has no leading, trailing or doubled `-`.
    pub fn validate_slug(slug: &str) -> Result<(), RoadmapError> {
        let invalid = || RoadmapError::InvalidSlug(slug.to_string());

        if slug.is_empty() || slug.len() > MAX_SLUG_LENGTH {
            return Err(invalid());
        }

        if !slug
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
        {
            return Err(invalid());
        }

        if slug.starts_with('-') || slug.ends_with('-') || slug.contains("--") {
            return Err(invalid());
        }

        Ok(())
    }

    /// Validate the phase list on its own.
    pub fn validate_phases(phases: &[Phase]) -> Result<(), RoadmapError> {
        let mut previous: Option<PhaseNumber> = None;

        for phase in phases {
            if phase.number.value() == 0 {
                return Err(RoadmapError::PhaseOrder(phase.number));
            }
            if let Some(prev) = previous {
                if phase.number == prev {
                    return Err(RoadmapError::DuplicatePhase(phase.number));
                }
                if phase.number < prev {
                    return Err(RoadmapError::PhaseOrder(phase.number));
                }
            }
            require_text(&phase.name, || format!("phase {}", phase.number), "name")?;
            previous = Some(phase.number);
        }

        Ok(())
    }

    /// Validate the stage list against an already validated phase list.
    pub fn validate_stages(stages: &[Stage], phases: &[Phase]) -> Result<(), RoadmapError> {
        if stages.is_empty() {
            return Err(RoadmapError::EmptyCatalog);
        }
        if stages.len() > MAX_STAGES {
            return Err(RoadmapError::TooManyStages {
                count: stages.len(),
                max: MAX_STAGES,
            });
        }

        let known_phases: BTreeSet<PhaseNumber> = phases.iter().map(|p| p.number).collect();
        let mut slugs = BTreeSet::new();
        let mut used_phases = BTreeSet::new();
        let mut current_phase: Option<PhaseNumber> = None;

        for (position, stage) in stages.iter().enumerate() {
            let expected = StageId(position.saturating_add(1) as u32);
            if stage.id != expected {
                return Err(RoadmapError::NonContiguousId {
                    position,
                    expected,
                    found: stage.id,
                });
            }

            Self::validate_slug(&stage.slug)?;
            if !slugs.insert(stage.slug.as_str()) {
                return Err(RoadmapError::DuplicateSlug(stage.slug.clone()));
            }

            if !known_phases.contains(&stage.phase_number) {
                return Err(RoadmapError::UnknownPhase {
                    stage: stage.id,
                    phase: stage.phase_number,
                });
            }

            // Phases may be skipped but never revisited
            if current_phase.is_some_and(|cur| stage.phase_number < cur) {
                return Err(RoadmapError::PhaseInterleaved {
                    stage: stage.id,
                    phase: stage.phase_number,
                });
            }
            current_phase = Some(stage.phase_number);
            used_phases.insert(stage.phase_number);

            let owner = || format!("stage {}", stage.slug);
            require_text(&stage.title, owner, "title")?;
            require_text(&stage.subtitle, owner, "subtitle")?;
            require_text(&stage.description, owner, "description")?;
        }

        if let Some(empty) = known_phases.difference(&used_phases).next() {
            return Err(RoadmapError::EmptyPhase(*empty));
        }

        Ok(())
    }
}

fn require_text(
    value: &str,
    owner: impl Fn() -> String,
    field: &'static str,
) -> Result<(), RoadmapError> {
    if value.trim().is_empty() {
        return Err(RoadmapError::EmptyField {
            owner: owner(),
            field,
        });
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curriculum::{builtin_phases, builtin_stages};

    #[test]
    fn builtin_lists_are_valid() {
        let phases = builtin_phases();
        assert!(Validator::validate_phases(&phases).is_ok());
        assert!(Validator::validate_stages(&builtin_stages(), &phases).is_ok());
    }

    #[test]
    fn slug_rules() {
        assert!(Validator::validate_slug("rlhf-dpo").is_ok());
        assert!(Validator::validate_slug("stage-2").is_ok());

        for bad in ["", "Tokenization", "-lead", "trail-", "dou--ble", "white space", "ümlaut"] {
            assert_eq!(
                Validator::validate_slug(bad),
                Err(RoadmapError::InvalidSlug(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }

        let long = "a".repeat(MAX_SLUG_LENGTH + 1);
        assert!(Validator::validate_slug(&long).is_err());
    }

    #[test]
    fn zero_phase_number_rejected() {
        let phases = vec![Phase::new(0, "Zero", "", "")];
        assert_eq!(
            Validator::validate_phases(&phases),
            Err(RoadmapError::PhaseOrder(PhaseNumber(0)))
        );
    }

    #[test]
    fn descending_phases_rejected() {
        let phases = vec![Phase::new(2, "B", "", ""), Phase::new(1, "A", "", "")];
        assert_eq!(
            Validator::validate_phases(&phases),
            Err(RoadmapError::PhaseOrder(PhaseNumber(1)))
        );
    }

    #[test]
    fn blank_title_rejected() {
        let phases = builtin_phases();
        let mut stages = builtin_stages();
        stages[3].title = "   ".to_string();

        assert_eq!(
            Validator::validate_stages(&stages, &phases),
            Err(RoadmapError::EmptyField {
                owner: "stage data-processing".to_string(),
                field: "title",
            })
        );
    }

    #[test]
    fn phase_without_stages_rejected() {
        let mut phases = builtin_phases();
        phases.push(Phase::new(9, "Retirement", "🌅", "#000000"));

        assert_eq!(
            Validator::validate_stages(&builtin_stages(), &phases),
            Err(RoadmapError::EmptyPhase(PhaseNumber(9)))
        );
    }

    #[test]
    fn revisiting_a_phase_rejected() {
        let phases = builtin_phases();
        let mut stages = builtin_stages();
        stages[6].phase_number = PhaseNumber(2);

        assert_eq!(
            Validator::validate_stages(&stages, &phases),
            Err(RoadmapError::PhaseInterleaved {
                stage: StageId(7),
                phase: PhaseNumber(2),
            })
        );
    }
}
