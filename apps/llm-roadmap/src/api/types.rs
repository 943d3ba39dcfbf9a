//! # API Request/Response Types
//!
//! This module defines the JSON structures for the HTTP API.

use llm_roadmap_core::{
    Difficulty, Navigation, Phase, PhaseGroup, Progress, Roadmap, RoadmapSummary, Stage,
    StageCatalog,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// HEALTH RESPONSE
// =============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub total_stages: usize,
}

impl HealthResponse {
    pub fn for_catalog(catalog: &StageCatalog) -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            total_stages: catalog.len(),
        }
    }
}

// =============================================================================
// ERROR RESPONSE
// =============================================================================

/// Body of every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { error: msg.into() }
    }

    pub fn stage_not_found(slug: &str) -> Self {
        Self::new(format!("Stage not found: {}", slug))
    }
}

// =============================================================================
// STAGE LINK
// =============================================================================

/// Compact reference to a stage, used for neighbours and search hits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageLink {
    pub id: u32,
    pub slug: String,
    pub title: String,
    pub icon: String,
    pub phase_number: u32,
}

impl From<&Stage> for StageLink {
    fn from(stage: &Stage) -> Self {
        Self {
            id: stage.id.value(),
            slug: stage.slug.clone(),
            title: stage.title.clone(),
            icon: stage.icon.clone(),
            phase_number: stage.phase_number.value(),
        }
    }
}

// =============================================================================
// LISTINGS
// =============================================================================

/// `GET /phases`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseListResponse {
    pub phases: Vec<Phase>,
}

/// `GET /stages` and `GET /phases/{number}/stages`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageListResponse {
    pub count: usize,
    pub stages: Vec<Stage>,
}

impl StageListResponse {
    pub fn from_refs(stages: &[&Stage]) -> Self {
        Self {
            count: stages.len(),
            stages: stages.iter().map(|s| (*s).clone()).collect(),
        }
    }
}

// =============================================================================
// STAGE DETAIL
// =============================================================================

/// `GET /stages/{slug}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageDetailResponse {
    pub stage: Stage,
    pub phase: Phase,
    pub position: usize,
    pub total: usize,
}

// =============================================================================
// PROGRESS
// =============================================================================

/// Progress of one slug. `found` is false for the zero sentinel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressResponse {
    pub slug: String,
    pub found: bool,
    pub completed: usize,
    pub total: usize,
    pub fraction: f64,
    pub percent: f64,
    pub basis_points: u32,
}

impl ProgressResponse {
    pub fn new(slug: &str, progress: Progress) -> Self {
        Self {
            slug: slug.to_string(),
            found: progress.is_started(),
            completed: progress.completed,
            total: progress.total,
            fraction: progress.fraction(),
            percent: progress.percent(),
            basis_points: progress.basis_points(),
        }
    }
}

// =============================================================================
// NAVIGATION
// =============================================================================

/// `GET /stages/{slug}/navigation`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationResponse {
    pub current: StageLink,
    pub phase: Phase,
    pub previous: Option<StageLink>,
    pub next: Option<StageLink>,
    pub progress: ProgressResponse,
    /// True on the last stage: the "next" action becomes "complete".
    pub complete: bool,
}

impl From<&Navigation<'_>> for NavigationResponse {
    fn from(nav: &Navigation<'_>) -> Self {
        Self {
            current: StageLink::from(nav.current),
            phase: nav.phase.clone(),
            previous: nav.previous.map(StageLink::from),
            next: nav.next.map(StageLink::from),
            progress: ProgressResponse::new(&nav.current.slug, nav.progress),
            complete: nav.is_final(),
        }
    }
}

// =============================================================================
// ROADMAP
// =============================================================================

/// One phase of the roadmap with its stages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseGroupJson {
    pub phase: Phase,
    pub stages: Vec<Stage>,
}

impl From<&PhaseGroup<'_>> for PhaseGroupJson {
    fn from(group: &PhaseGroup<'_>) -> Self {
        Self {
            phase: group.phase.clone(),
            stages: group.stages.iter().map(|s| (*s).clone()).collect(),
        }
    }
}

/// Roadmap headline numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryJson {
    pub total_stages: usize,
    pub total_phases: usize,
    pub total_duration: String,
    pub by_difficulty: BTreeMap<Difficulty, usize>,
}

impl From<&RoadmapSummary> for SummaryJson {
    fn from(summary: &RoadmapSummary) -> Self {
        Self {
            total_stages: summary.total_stages,
            total_phases: summary.total_phases,
            total_duration: summary.total_duration.clone(),
            by_difficulty: summary.by_difficulty.clone(),
        }
    }
}

/// `GET /roadmap`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapResponse {
    pub phases: Vec<PhaseGroupJson>,
    pub summary: SummaryJson,
}

impl From<&Roadmap<'_>> for RoadmapResponse {
    fn from(roadmap: &Roadmap<'_>) -> Self {
        Self {
            phases: roadmap.groups.iter().map(PhaseGroupJson::from).collect(),
            summary: SummaryJson::from(&roadmap.summary),
        }
    }
}

// =============================================================================
// SEARCH
// =============================================================================

/// `GET /search?q=...` query string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// `GET /search` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<StageLink>,
}
