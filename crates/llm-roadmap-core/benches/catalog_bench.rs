//! # Catalog Benchmarks
//!
//! Performance benchmarks for llm-roadmap-core queries.
//!
//! Run with: `cargo bench -p llm-roadmap-core`

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use llm_roadmap_core::{Difficulty, Phase, PhaseNumber, Stage, StageCatalog, StageId};
use std::hint::black_box;

/// Create a catalog of `size` stages spread over phases of ten.
fn create_catalog(size: usize) -> StageCatalog {
    let phase_count = size.div_ceil(10);
    let phases = (1..=phase_count as u32)
        .map(|n| Phase::new(n, format!("Phase {n}"), "", ""))
        .collect();

    let stages = (1..=size as u32)
        .map(|id| Stage {
            id: StageId(id),
            slug: format!("stage-{id}"),
            phase_number: PhaseNumber((id - 1) / 10 + 1),
            icon: String::new(),
            title: format!("Stage {id}"),
            subtitle: "Benchmark".to_string(),
            description: "A benchmark stage.".to_string(),
            color: String::new(),
            duration: "~1 min".to_string(),
            difficulty: Difficulty::Intermediate,
            key_topics: vec!["Topic".to_string()],
        })
        .collect();

    StageCatalog::new(phases, stages, "benchmark").expect("catalog")
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    group.bench_function("builtin", |b| {
        b.iter(|| black_box(StageCatalog::builtin().expect("builtin")));
    });

    for size in [16, 256, 1024].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| black_box(create_catalog(size)));
        });
    }

    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("stage_by_slug");

    for size in [16, 256, 1024].iter() {
        let catalog = create_catalog(*size);
        let slug = format!("stage-{}", size / 2);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(catalog.stage_by_slug(black_box(&slug))));
        });
    }

    group.finish();
}

fn bench_navigation(c: &mut Criterion) {
    let catalog = StageCatalog::builtin().expect("builtin");

    c.bench_function("navigation_tokenization", |b| {
        b.iter(|| black_box(catalog.navigation(black_box("tokenization"))));
    });

    c.bench_function("roadmap_builtin", |b| {
        b.iter(|| black_box(catalog.roadmap()));
    });
}

criterion_group!(benches, bench_construction, bench_lookup, bench_navigation);
criterion_main!(benches);
