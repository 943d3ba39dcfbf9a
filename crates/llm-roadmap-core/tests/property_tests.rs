//! # Property-Based Tests
//!
//! Navigation and progress invariants checked with proptest, over the
//! built-in curriculum and over generated catalogs of arbitrary shape.

#![allow(clippy::unwrap_used, clippy::panic)]

use llm_roadmap_core::{Difficulty, Phase, PhaseNumber, Stage, StageCatalog, StageId};
use proptest::collection::vec;
use proptest::prelude::*;

/// Build a valid catalog whose phase `k` (1-based) holds `sizes[k - 1]` stages.
fn synthetic_catalog(sizes: &[usize]) -> StageCatalog {
    let phases: Vec<Phase> = (1..=sizes.len() as u32)
        .map(|n| Phase::new(n, format!("Phase {n}"), "", ""))
        .collect();

    let mut stages = Vec::new();
    for (phase_idx, &size) in sizes.iter().enumerate() {
        for _ in 0..size {
            let id = stages.len() as u32 + 1;
            stages.push(Stage {
                id: StageId(id),
                slug: format!("stage-{id}"),
                phase_number: PhaseNumber(phase_idx as u32 + 1),
                icon: String::new(),
                title: format!("Stage {id}"),
                subtitle: "Generated".to_string(),
                description: "A generated stage.".to_string(),
                color: String::new(),
                duration: "~1 min".to_string(),
                difficulty: Difficulty::Beginner,
                key_topics: Vec::new(),
            });
        }
    }

    StageCatalog::new(phases, stages, "generated").unwrap()
}

proptest! {
    /// Every generated stage is found by slug and navigates to id +/- 1.
    #[test]
    fn adjacency_follows_ids(sizes in vec(1usize..6, 1..10)) {
        let catalog = synthetic_catalog(&sizes);
        let total = catalog.len();

        for stage in catalog.stages() {
            let id = stage.id.value() as usize;
            prop_assert_eq!(catalog.stage_by_slug(&stage.slug), Some(stage));

            let next = catalog.next_stage(&stage.slug).map(|s| s.id.value() as usize);
            let prev = catalog.previous_stage(&stage.slug).map(|s| s.id.value() as usize);
            prop_assert_eq!(next, (id < total).then_some(id + 1));
            prop_assert_eq!(prev, (id > 1).then_some(id - 1));
        }
    }

    /// Progress is strictly increasing and the last stage is complete.
    #[test]
    fn progress_is_monotonic(sizes in vec(1usize..6, 1..10)) {
        let catalog = synthetic_catalog(&sizes);
        let progress: Vec<_> = catalog
            .stages()
            .iter()
            .map(|s| catalog.stage_progress(&s.slug))
            .collect();

        for pair in progress.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        prop_assert!(progress.iter().all(|p| p.basis_points() <= 10_000));
        prop_assert!(progress.last().unwrap().is_complete());
    }

    /// Phase listings partition the catalog in canonical order.
    #[test]
    fn phases_partition_the_catalog(sizes in vec(1usize..6, 1..10)) {
        let catalog = synthetic_catalog(&sizes);

        for (k, &size) in sizes.iter().enumerate() {
            let listed = catalog.stages_by_phase(k as i64 + 1);
            prop_assert_eq!(listed.len(), size);
            prop_assert!(listed.windows(2).all(|w| w[0].id < w[1].id));
        }

        let flattened: Vec<_> = catalog.roadmap().stages().map(|s| s.id).collect();
        let canonical: Vec<_> = catalog.stages().iter().map(|s| s.id).collect();
        prop_assert_eq!(flattened, canonical);
    }

    /// Arbitrary strings never panic and unknown ones always miss.
    #[test]
    fn arbitrary_slugs_are_total(slug in "\\PC{0,40}") {
        let catalog = StageCatalog::builtin().unwrap();
        let known = catalog.stage_by_slug(&slug).is_some();

        prop_assert_eq!(catalog.stage_progress(&slug).is_started(), known);
        if !known {
            prop_assert!(catalog.next_stage(&slug).is_none());
            prop_assert!(catalog.previous_stage(&slug).is_none());
            prop_assert!(catalog.navigation(&slug).is_none());
        }
    }

    /// Any integer phase number is accepted by the phase query.
    #[test]
    fn any_phase_number_is_total(number in any::<i64>()) {
        let catalog = StageCatalog::builtin().unwrap();
        let listed = catalog.stages_by_phase(number);
        prop_assert_eq!(listed.is_empty(), !(1..=8).contains(&number));
    }
}
