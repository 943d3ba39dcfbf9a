//! Integration tests for the CLI: catalog loading and text rendering.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use clap::Parser;
use llm_roadmap::cli::{
    Cli, Commands, cmd_export, load_catalog, render_phase, render_progress, render_roadmap,
};
use llm_roadmap_core::{CatalogFormat, RoadmapError, catalog_to_string};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

const SMALL_TOML: &str = r##"
version = 1
total_duration = "~10 min"

[[phases]]
number = 1
name = "Basics"
icon = "B"
color = "#000000"

[[stages]]
id = 1
slug = "intro"
phase_number = 1
icon = "I"
title = "Intro"
subtitle = "Start here"
description = "The first stage."
color = "#111111"
duration = "~5 min"
difficulty = "beginner"
key_topics = ["Welcome"]

[[stages]]
id = 2
slug = "outro"
phase_number = 1
icon = "O"
title = "Outro"
subtitle = "Finish here"
description = "The last stage."
color = "#222222"
duration = "~5 min"
difficulty = "beginner"
"##;

fn temp_file(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

// =============================================================================
// ARGUMENT PARSING
// =============================================================================

#[test]
fn test_no_subcommand_defaults_to_roadmap() {
    let cli = Cli::try_parse_from(["llm-roadmap"]).unwrap();
    assert!(cli.command.is_none());
    assert!(!cli.json_mode);
}

#[test]
fn test_phase_accepts_negative_numbers() {
    let cli = Cli::try_parse_from(["llm-roadmap", "phase", "-3"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::Phase { number: -3 })));
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from(["llm-roadmap", "stage", "tokenization", "--json-mode"]).unwrap();
    assert!(cli.json_mode);
    match cli.command {
        Some(Commands::Stage { slug }) => assert_eq!(slug, "tokenization"),
        other => panic!("unexpected command: {:?}", other),
    }
}

// =============================================================================
// CATALOG LOADING
// =============================================================================

#[test]
fn test_load_builtin_catalog() {
    let catalog = load_catalog(None).unwrap();
    assert_eq!(catalog.len(), 16);
}

#[test]
fn test_load_toml_catalog() {
    let file = temp_file(".toml", SMALL_TOML);

    let catalog = load_catalog(Some(file.path())).unwrap();

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.total_duration(), "~10 min");
    assert_eq!(
        catalog.next_stage("intro").map(|s| s.slug.as_str()),
        Some("outro")
    );
}

#[test]
fn test_load_json_catalog_from_export() {
    let builtin = load_catalog(None).unwrap();
    let json = catalog_to_string(&builtin, CatalogFormat::Json).unwrap();
    let file = temp_file(".json", &json);

    let loaded = load_catalog(Some(file.path())).unwrap();

    assert_eq!(loaded.stages(), builtin.stages());
    assert_eq!(loaded.phases(), builtin.phases());
}

#[test]
fn test_load_rejects_invalid_catalog() {
    let broken = SMALL_TOML.replace("id = 2", "id = 3");
    let file = temp_file(".toml", &broken);

    let err = load_catalog(Some(file.path())).unwrap_err();

    assert!(matches!(err, RoadmapError::NonContiguousId { .. }));
}

#[test]
fn test_load_rejects_unknown_extension() {
    let file = temp_file(".yaml", SMALL_TOML);
    assert!(load_catalog(Some(file.path())).is_err());
}

#[test]
fn test_load_rejects_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = load_catalog(Some(&dir.path().join("missing.toml"))).unwrap_err();
    assert!(matches!(err, RoadmapError::IoError(_)));
}

// =============================================================================
// EXPORT
// =============================================================================

#[test]
fn test_export_to_file_then_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.toml");
    let catalog = load_catalog(None).unwrap();

    cmd_export(&catalog, Some(&path), "toml").unwrap();

    let reloaded = load_catalog(Some(&path)).unwrap();
    assert_eq!(reloaded.len(), 16);
    assert_eq!(reloaded.total_duration(), "~2 hours");
}

#[test]
fn test_export_rejects_unknown_format() {
    let dir = TempDir::new().unwrap();
    let catalog = load_catalog(None).unwrap();

    let result = cmd_export(&catalog, Some(&dir.path().join("out.csv")), "csv");

    assert!(result.is_err());
}

// =============================================================================
// RENDERING
// =============================================================================

#[test]
fn test_render_custom_catalog() {
    let file = temp_file(".toml", SMALL_TOML);
    let catalog = load_catalog(Some(file.path())).unwrap();

    let roadmap = render_roadmap(&catalog);
    assert!(roadmap.contains("2 stages across 1 phases (~10 min)"));
    assert!(roadmap.contains("Start with: llm-roadmap stage intro"));

    assert!(render_phase(&catalog, 1).contains("Phase 1: Basics"));
    assert!(render_progress(&catalog, "outro").contains("100.00%"));
    assert!(render_progress(&catalog, "intro").contains("50.00%"));
}
