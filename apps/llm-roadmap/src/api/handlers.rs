//! # API Endpoint Handlers
//!
//! This module implements the actual HTTP endpoint handlers. Every handler
//! only reads the catalog; a slug miss becomes `404` with an
//! [`ErrorResponse`] body, an unknown phase an empty list.

use super::{
    AppState,
    types::{
        ErrorResponse, HealthResponse, NavigationResponse, PhaseListResponse, ProgressResponse,
        RoadmapResponse, SearchParams, SearchResponse, StageDetailResponse, StageLink,
        StageListResponse,
    },
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

fn not_found(slug: &str) -> Response {
    tracing::debug!("Stage not found: {}", slug);
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::stage_not_found(slug)),
    )
        .into_response()
}

// =============================================================================
// HEALTH HANDLER
// =============================================================================

/// Health check endpoint.
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse::for_catalog(&state.catalog))
}

// =============================================================================
// PHASE HANDLERS
// =============================================================================

/// List all phases.
pub async fn phases_handler(State(state): State<AppState>) -> impl IntoResponse {
    let response = PhaseListResponse {
        phases: state.catalog.phases().to_vec(),
    };
    (StatusCode::OK, Json(response))
}

/// List the stages of one phase. Unknown numbers give an empty list.
pub async fn phase_stages_handler(
    State(state): State<AppState>,
    Path(number): Path<i64>,
) -> impl IntoResponse {
    let stages = state.catalog.stages_by_phase(number);
    (StatusCode::OK, Json(StageListResponse::from_refs(&stages)))
}

// =============================================================================
// STAGE HANDLERS
// =============================================================================

/// List every stage in canonical order.
pub async fn stages_handler(State(state): State<AppState>) -> impl IntoResponse {
    let stages = state.catalog.stages();
    let response = StageListResponse {
        count: stages.len(),
        stages: stages.to_vec(),
    };
    (StatusCode::OK, Json(response))
}

/// Stage detail view.
pub async fn stage_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Response {
    let catalog = &state.catalog;
    let Some(stage) = catalog.stage_by_slug(&slug) else {
        return not_found(&slug);
    };
    let Some(phase) = catalog.phase_of(stage) else {
        return not_found(&slug);
    };

    let progress = catalog.stage_progress(&slug);
    let response = StageDetailResponse {
        stage: stage.clone(),
        phase: phase.clone(),
        position: progress.completed,
        total: progress.total,
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// Navigation header data for one stage.
pub async fn navigation_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Response {
    match state.catalog.navigation(&slug) {
        Some(nav) => (StatusCode::OK, Json(NavigationResponse::from(&nav))).into_response(),
        None => not_found(&slug),
    }
}

/// Progress of one slug. An unknown slug is 0%, not an error.
pub async fn progress_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> impl IntoResponse {
    let progress = state.catalog.stage_progress(&slug);
    (StatusCode::OK, Json(ProgressResponse::new(&slug, progress)))
}

// =============================================================================
// ROADMAP HANDLER
// =============================================================================

/// Phase-then-stage roadmap.
pub async fn roadmap_handler(State(state): State<AppState>) -> impl IntoResponse {
    let roadmap = state.catalog.roadmap();
    (StatusCode::OK, Json(RoadmapResponse::from(&roadmap)))
}

// =============================================================================
// SEARCH HANDLER
// =============================================================================

/// Search stages by title, subtitle, slug or key topic.
pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let results = state
        .catalog
        .search(&params.q)
        .into_iter()
        .map(StageLink::from)
        .collect();

    let response = SearchResponse {
        query: params.q,
        results,
    };
    (StatusCode::OK, Json(response))
}
