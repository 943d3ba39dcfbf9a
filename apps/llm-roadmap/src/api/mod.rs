//! # Roadmap HTTP API Module
//!
//! This module implements the read-only JSON API using axum.
//!
//! ## Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /phases` - All phases
//! - `GET /phases/{number}/stages` - Stages of one phase
//! - `GET /stages` - All stages in canonical order
//! - `GET /stages/{slug}` - Stage detail (404 on miss)
//! - `GET /stages/{slug}/navigation` - Previous/next/progress (404 on miss)
//! - `GET /stages/{slug}/progress` - Progress (0 on miss)
//! - `GET /roadmap` - Phase-then-stage roadmap
//! - `GET /search?q=term` - Stage search
//!
//! ## Configuration
//!
//! See [`crate::config`]: `ROADMAP_CORS_ORIGINS`, `ROADMAP_RATE_LIMIT`.

mod handlers;
mod middleware;
mod types;

pub use middleware::{GlobalRateLimiter, create_rate_limiter};
// Re-export handlers and types for integration tests (via `llm_roadmap::api::*`)
pub use handlers::{
    health_handler, navigation_handler, phase_stages_handler, phases_handler, progress_handler,
    roadmap_handler, search_handler, stage_handler, stages_handler,
};
pub use types::{
    ErrorResponse, HealthResponse, NavigationResponse, PhaseGroupJson, PhaseListResponse,
    ProgressResponse, RoadmapResponse, SearchParams, SearchResponse, StageDetailResponse,
    StageLink, StageListResponse, SummaryJson,
};

use crate::config::{CorsOrigins, LOCALHOST_ORIGINS, ServerConfig};
use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware as axum_middleware,
    routing::get,
};
use llm_roadmap_core::{RoadmapError, StageCatalog};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

// =============================================================================
// SERVER STATE
// =============================================================================

/// Shared server state: the catalog, read-only, no lock needed.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<StageCatalog>,
}

impl AppState {
    /// Create new app state around a catalog.
    #[must_use]
    pub fn new(catalog: Arc<StageCatalog>) -> Self {
        Self { catalog }
    }
}

// =============================================================================
// CORS CONFIGURATION
// =============================================================================

/// Build the CORS layer. Only `GET` is ever allowed.
fn build_cors_layer(origins: &CorsOrigins) -> CorsLayer {
    match origins {
        CorsOrigins::Any => {
            tracing::warn!("CORS: Allowing ALL origins (ROADMAP_CORS_ORIGINS=*)");
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([Method::GET, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE])
        }
        CorsOrigins::List(list) => {
            let allowed = parse_origins(list.iter().map(String::as_str));
            if allowed.is_empty() {
                tracing::warn!("CORS: No valid origins configured, defaulting to localhost only");
                build_localhost_cors()
            } else {
                restricted_cors(allowed)
            }
        }
        CorsOrigins::Localhost => {
            tracing::info!("CORS: No ROADMAP_CORS_ORIGINS set, defaulting to localhost only");
            build_localhost_cors()
        }
    }
}

fn parse_origins<'a>(origins: impl Iterator<Item = &'a str>) -> Vec<HeaderValue> {
    origins
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(hv) => {
                tracing::info!("CORS: Allowing origin: {}", origin);
                Some(hv)
            }
            Err(e) => {
                tracing::warn!("CORS: Invalid origin '{}': {}", origin, e);
                None
            }
        })
        .collect()
}

fn build_localhost_cors() -> CorsLayer {
    restricted_cors(parse_origins(LOCALHOST_ORIGINS.into_iter()))
}

fn restricted_cors(origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

// =============================================================================
// ROUTER CREATION
// =============================================================================

/// Create the router with policy read from the environment.
pub fn create_router(state: AppState) -> Router {
    create_router_with_config(state, &ServerConfig::from_env())
}

/// Create the axum router with all endpoints and middleware.
///
/// Middleware stack (outer to inner):
/// 1. Tracing - logs all requests
/// 2. CORS - handles preflight requests
/// 3. Rate Limiting - if enabled
pub fn create_router_with_config(state: AppState, config: &ServerConfig) -> Router {
    let mut router = Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/phases", get(handlers::phases_handler))
        .route("/phases/{number}/stages", get(handlers::phase_stages_handler))
        .route("/stages", get(handlers::stages_handler))
        .route("/stages/{slug}", get(handlers::stage_handler))
        .route("/stages/{slug}/navigation", get(handlers::navigation_handler))
        .route("/stages/{slug}/progress", get(handlers::progress_handler))
        .route("/roadmap", get(handlers::roadmap_handler))
        .route("/search", get(handlers::search_handler));

    if config.rate_limit > 0 {
        tracing::info!("Rate limiting enabled: {} requests/second", config.rate_limit);
        router = router.layer(axum_middleware::from_fn_with_state(
            create_rate_limiter(config.rate_limit),
            middleware::rate_limit_middleware,
        ));
    } else {
        tracing::info!("Rate limiting disabled");
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors_layer(&config.cors_origins)),
        )
        .with_state(state)
}

// =============================================================================
// SERVER STARTUP
// =============================================================================

/// Start the HTTP server and run until Ctrl+C.
pub async fn run_server(addr: &str, catalog: Arc<StageCatalog>) -> Result<(), RoadmapError> {
    let router = create_router(AppState::new(catalog));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| RoadmapError::IoError(format!("Bind failed: {}", e)))?;

    tracing::info!("Roadmap HTTP server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| RoadmapError::IoError(format!("Server error: {}", e)))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // Without a signal handler the server runs until killed
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
