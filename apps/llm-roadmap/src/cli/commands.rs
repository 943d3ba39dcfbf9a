//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.
//!
//! Text renderers return `String` so they can be tested without capturing
//! stdout; the `cmd_*` functions print them, or the matching API response
//! type as JSON in `--json-mode`.

use crate::api::{
    self, NavigationResponse, ProgressResponse, RoadmapResponse, SearchResponse,
    StageDetailResponse, StageLink, StageListResponse,
};
use llm_roadmap_core::{
    CatalogFormat, Navigation, Progress, RoadmapError, Stage, StageCatalog, catalog_from_str,
    catalog_to_string, primitives::MAX_CATALOG_DOCUMENT_SIZE, shared,
};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::sync::Arc;

// =============================================================================
// CATALOG LOADING
// =============================================================================

/// Load the catalog: the built-in one, or a validated TOML/JSON file.
pub fn load_catalog(path: Option<&Path>) -> Result<Arc<StageCatalog>, RoadmapError> {
    let Some(path) = path else {
        return Ok(Arc::new(shared()?.clone()));
    };

    let validated = validate_file_path(path)?;
    let format = CatalogFormat::from_path(&validated)?;
    validate_file_size(&validated, MAX_CATALOG_DOCUMENT_SIZE as u64)?;

    let text = std::fs::read_to_string(&validated)
        .map_err(|e| RoadmapError::IoError(format!("Read file: {}", e)))?;

    tracing::info!("Loading catalog from {:?} ({:?})", validated, format);
    let catalog = catalog_from_str(&text, format)?;
    Ok(Arc::new(catalog))
}

/// Validate file size before reading.
fn validate_file_size(path: &Path, max_size: u64) -> Result<(), RoadmapError> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| RoadmapError::IoError(format!("Cannot read file metadata: {}", e)))?;

    if metadata.len() > max_size {
        return Err(RoadmapError::DeserializationError(format!(
            "File size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            max_size
        )));
    }
    Ok(())
}

/// Resolve an input path and make sure it is a regular file.
fn validate_file_path(path: &Path) -> Result<PathBuf, RoadmapError> {
    let canonical = path.canonicalize().map_err(|e| {
        RoadmapError::IoError(format!("Invalid file path '{}': {}", path.display(), e))
    })?;

    if !canonical.is_file() {
        return Err(RoadmapError::IoError(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }

    Ok(canonical)
}

/// Resolve an output path: the parent directory must exist.
fn validate_output_path(path: &Path) -> Result<PathBuf, RoadmapError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let canonical_parent = parent.canonicalize().map_err(|e| {
        RoadmapError::IoError(format!(
            "Invalid output directory '{}': {}",
            parent.display(),
            e
        ))
    })?;

    if !canonical_parent.is_dir() {
        return Err(RoadmapError::IoError(format!(
            "Output directory '{}' is not a valid directory",
            parent.display()
        )));
    }

    let filename = path
        .file_name()
        .ok_or_else(|| RoadmapError::IoError("Output path has no filename".to_string()))?;

    Ok(canonical_parent.join(filename))
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

fn stage_line(stage: &Stage) -> String {
    format!(
        "{:>3}. {} {} [{}, {}]",
        stage.id, stage.icon, stage.title, stage.duration, stage.difficulty
    )
}

fn link_label(stage: Option<&Stage>) -> String {
    stage
        .map(|s| format!("{} {} ({})", s.icon, s.title, s.slug))
        .unwrap_or_else(|| "-".to_string())
}

fn progress_bar(progress: &Progress, width: usize) -> String {
    let bp = progress.basis_points() as usize;
    let filled = bp.saturating_mul(width) / 10_000;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(width.saturating_sub(filled))
    )
}

// =============================================================================
// ROADMAP COMMAND
// =============================================================================

/// Render the phase-then-stage roadmap.
pub fn render_roadmap(catalog: &StageCatalog) -> String {
    let roadmap = catalog.roadmap();
    let mut out = String::new();

    let _ = writeln!(out, "The Complete LLM Lifecycle");
    let _ = writeln!(out, "==========================");
    let _ = writeln!(
        out,
        "{} stages across {} phases ({})",
        roadmap.summary.total_stages, roadmap.summary.total_phases, roadmap.summary.total_duration
    );

    for group in &roadmap.groups {
        let count = group.stages.len();
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{} {} ({} stage{})",
            group.phase.icon,
            group.phase,
            count,
            if count == 1 { "" } else { "s" }
        );
        for stage in &group.stages {
            let _ = writeln!(out, "  {}", stage_line(stage));
            let _ = writeln!(out, "       {}", stage.subtitle);
        }
    }

    if let Some(first) = catalog.first_stage() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Start with: llm-roadmap stage {}", first.slug);
    }

    out
}

/// Show the roadmap.
pub fn cmd_roadmap(catalog: &StageCatalog, json_mode: bool) -> Result<(), RoadmapError> {
    if json_mode {
        print_json(&RoadmapResponse::from(&catalog.roadmap()));
    } else {
        print!("{}", render_roadmap(catalog));
    }
    Ok(())
}

// =============================================================================
// STAGE COMMAND
// =============================================================================

/// Render the detail view of one stage, or `None` if the slug is unknown.
pub fn render_stage(catalog: &StageCatalog, slug: &str) -> Option<String> {
    let stage = catalog.stage_by_slug(slug)?;
    let phase = catalog.phase_of(stage)?;
    let progress = catalog.stage_progress(slug);
    let mut out = String::new();

    let _ = writeln!(out, "{} {}", stage.icon, stage.title);
    let _ = writeln!(out, "{}", stage.subtitle);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", stage.description);
    let _ = writeln!(out);
    let _ = writeln!(out, "Phase:      {}", phase);
    let _ = writeln!(out, "Position:   {}", progress);
    let _ = writeln!(out, "Duration:   {}", stage.duration);
    let _ = writeln!(out, "Difficulty: {}", stage.difficulty);
    let _ = writeln!(out, "Key topics:");
    for topic in &stage.key_topics {
        let _ = writeln!(out, "  - {}", topic);
    }

    Some(out)
}

/// Show one stage. An unknown slug is reported as not found.
pub fn cmd_stage(catalog: &StageCatalog, json_mode: bool, slug: &str) -> Result<(), RoadmapError> {
    if json_mode {
        let stage = catalog
            .stage_by_slug(slug)
            .ok_or_else(|| RoadmapError::StageNotFound(slug.to_string()))?;
        let phase = catalog
            .phase_of(stage)
            .ok_or_else(|| RoadmapError::StageNotFound(slug.to_string()))?;
        let progress = catalog.stage_progress(slug);
        print_json(&StageDetailResponse {
            stage: stage.clone(),
            phase: phase.clone(),
            position: progress.completed,
            total: progress.total,
        });
        return Ok(());
    }

    let text =
        render_stage(catalog, slug).ok_or_else(|| RoadmapError::StageNotFound(slug.to_string()))?;
    print!("{}", text);
    Ok(())
}

// =============================================================================
// NAV COMMAND
// =============================================================================

/// Render the navigation header for one stage.
pub fn render_navigation(nav: &Navigation<'_>) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{} | {} {}", nav.progress, nav.current.icon, nav.current.title);
    let _ = writeln!(out, "{}", nav.phase);
    let _ = writeln!(out, "Previous: {}", link_label(nav.previous));
    if nav.is_final() {
        let _ = writeln!(out, "Next:     Complete!");
    } else {
        let _ = writeln!(out, "Next:     {}", link_label(nav.next));
    }
    let _ = writeln!(
        out,
        "{} {:.2}%",
        progress_bar(&nav.progress, 32),
        nav.progress.percent()
    );

    out
}

/// Show navigation for one stage.
pub fn cmd_nav(catalog: &StageCatalog, json_mode: bool, slug: &str) -> Result<(), RoadmapError> {
    let nav = catalog
        .navigation(slug)
        .ok_or_else(|| RoadmapError::StageNotFound(slug.to_string()))?;

    if json_mode {
        print_json(&NavigationResponse::from(&nav));
    } else {
        print!("{}", render_navigation(&nav));
    }
    Ok(())
}

// =============================================================================
// PHASE COMMAND
// =============================================================================

/// Render the stage list of one phase.
pub fn render_phase(catalog: &StageCatalog, number: i64) -> String {
    let stages = catalog.stages_by_phase(number);
    let mut out = String::new();

    let heading = u32::try_from(number)
        .ok()
        .and_then(|n| catalog.phase(llm_roadmap_core::PhaseNumber(n)));
    match heading {
        Some(phase) => {
            let _ = writeln!(out, "{} {}", phase.icon, phase);
        }
        None => {
            let _ = writeln!(out, "Phase {}", number);
        }
    }

    if stages.is_empty() {
        let _ = writeln!(out, "  (no stages)");
    }
    for stage in stages {
        let _ = writeln!(out, "  {}", stage_line(stage));
    }

    out
}

/// List the stages of one phase. An unknown phase is an empty list.
pub fn cmd_phase(catalog: &StageCatalog, json_mode: bool, number: i64) -> Result<(), RoadmapError> {
    if json_mode {
        print_json(&StageListResponse::from_refs(&catalog.stages_by_phase(number)));
    } else {
        print!("{}", render_phase(catalog, number));
    }
    Ok(())
}

// =============================================================================
// PROGRESS COMMAND
// =============================================================================

/// Render progress for a slug; unknown slugs show 0%.
pub fn render_progress(catalog: &StageCatalog, slug: &str) -> String {
    let progress = catalog.stage_progress(slug);
    let mut out = String::new();

    if progress.is_started() {
        let _ = writeln!(out, "{}: {}", slug, progress);
    } else {
        let _ = writeln!(out, "{}: not in the curriculum", slug);
    }
    let _ = writeln!(
        out,
        "{} {:.2}%",
        progress_bar(&progress, 32),
        progress.percent()
    );

    out
}

/// Show progress at a stage.
pub fn cmd_progress(
    catalog: &StageCatalog,
    json_mode: bool,
    slug: &str,
) -> Result<(), RoadmapError> {
    if json_mode {
        print_json(&ProgressResponse::new(slug, catalog.stage_progress(slug)));
    } else {
        print!("{}", render_progress(catalog, slug));
    }
    Ok(())
}

// =============================================================================
// SEARCH COMMAND
// =============================================================================

/// Search stages by term.
pub fn cmd_search(catalog: &StageCatalog, json_mode: bool, term: &str) -> Result<(), RoadmapError> {
    let results = catalog.search(term);

    if json_mode {
        print_json(&SearchResponse {
            query: term.to_string(),
            results: results.into_iter().map(StageLink::from).collect(),
        });
        return Ok(());
    }

    if results.is_empty() {
        println!("No stages match '{}'", term);
        return Ok(());
    }

    println!("{} stage(s) match '{}':", results.len(), term);
    for stage in results {
        println!("  {}  ({})", stage_line(stage), stage.slug);
    }
    Ok(())
}

// =============================================================================
// VALIDATE COMMAND
// =============================================================================

/// Report on an already loaded (and therefore valid) catalog.
pub fn cmd_validate(
    catalog: &StageCatalog,
    json_mode: bool,
    source: Option<&Path>,
) -> Result<(), RoadmapError> {
    let source_label = source
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in".to_string());

    if json_mode {
        let output = serde_json::json!({
            "valid": true,
            "source": source_label,
            "stages": catalog.len(),
            "phases": catalog.phases().len(),
            "total_duration": catalog.total_duration(),
        });
        print_json(&output);
        return Ok(());
    }

    println!("Catalog OK ({})", source_label);
    println!("  Stages:   {}", catalog.len());
    println!("  Phases:   {}", catalog.phases().len());
    println!("  Duration: {}", catalog.total_duration());
    Ok(())
}

// =============================================================================
// EXPORT COMMAND
// =============================================================================

/// Export the catalog as TOML or JSON.
pub fn cmd_export(
    catalog: &StageCatalog,
    output: Option<&Path>,
    format: &str,
) -> Result<(), RoadmapError> {
    let format = CatalogFormat::from_name(format)?;
    let text = catalog_to_string(catalog, format)?;

    match output {
        Some(path) => {
            let validated = validate_output_path(path)?;
            std::fs::write(&validated, text.as_bytes())
                .map_err(|e| RoadmapError::IoError(format!("Write file: {}", e)))?;
            tracing::info!("Exported {} stages to {:?}", catalog.len(), validated);
        }
        None => print!("{}", text),
    }

    Ok(())
}

// =============================================================================
// SERVER COMMAND
// =============================================================================

/// Start the HTTP server.
pub async fn cmd_server(
    catalog: Arc<StageCatalog>,
    host: &str,
    port: u16,
) -> Result<(), RoadmapError> {
    println!("LLM Roadmap Server Starting...");
    println!();
    println!("Configuration:");
    println!("  Host:    {}", host);
    println!("  Port:    {}", port);
    println!("  Stages:  {}", catalog.len());
    println!();
    println!("Endpoints:");
    println!("  GET /health                     - Health check");
    println!("  GET /roadmap                    - Phases and stages");
    println!("  GET /phases                     - All phases");
    println!("  GET /phases/{{number}}/stages     - Stages of a phase");
    println!("  GET /stages                     - All stages");
    println!("  GET /stages/{{slug}}              - Stage detail");
    println!("  GET /stages/{{slug}}/navigation   - Previous/next/progress");
    println!("  GET /stages/{{slug}}/progress     - Progress");
    println!("  GET /search?q=term              - Search stages");
    println!();
    println!("Press Ctrl+C to stop");
    println!();

    let addr = format!("{}:{}", host, port);
    api::run_server(&addr, catalog).await
}

// =============================================================================
// TESTS
// =============================================================================
