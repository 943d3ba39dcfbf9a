//! # Roadmap
//!
//! The landing-page view of the catalog: phases in ascending number, each
//! with its stages in ascending id, plus summary counts.

use crate::{Difficulty, Phase, Stage, StageCatalog};
use serde::Serialize;
use std::collections::BTreeMap;

/// One phase with its stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseGroup<'a> {
    pub phase: &'a Phase,
    pub stages: Vec<&'a Stage>,
}

/// Headline numbers for the whole curriculum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoadmapSummary {
    pub total_stages: usize,
    pub total_phases: usize,
    pub total_duration: String,
    /// Stage count per difficulty. Every difficulty is present, possibly 0.
    pub by_difficulty: BTreeMap<Difficulty, usize>,
}

/// Phase-then-stage listing of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Roadmap<'a> {
    pub groups: Vec<PhaseGroup<'a>>,
    pub summary: RoadmapSummary,
}

impl<'a> Roadmap<'a> {
    /// Stages in roadmap order. Equals canonical order because phases are
    /// consecutive runs of stages.
    pub fn stages(&self) -> impl Iterator<Item = &'a Stage> + '_ {
        self.groups.iter().flat_map(|g| g.stages.iter().copied())
    }
}

impl StageCatalog {
    /// Group the catalog by phase for display.
    #[must_use]
    pub fn roadmap(&self) -> Roadmap<'_> {
        let groups = self
            .phases()
            .iter()
            .map(|phase| PhaseGroup {
                phase,
                stages: self.stages_by_phase(i64::from(phase.number.value())),
            })
            .collect();

        let mut by_difficulty: BTreeMap<Difficulty, usize> =
            Difficulty::ALL.into_iter().map(|d| (d, 0)).collect();
        for stage in self.stages() {
            let count = by_difficulty.entry(stage.difficulty).or_insert(0);
            *count = count.saturating_add(1);
        }

        Roadmap {
            groups,
            summary: RoadmapSummary {
                total_stages: self.len(),
                total_phases: self.phases().len(),
                total_duration: self.total_duration().to_string(),
                by_difficulty,
            },
        }
    }
}
