//! # LLM Roadmap
//!
//! The main binary for the stage-by-stage LLM lifecycle curriculum.
//!
//! This application provides:
//! - CLI interface for browsing the roadmap
//! - HTTP JSON API server (axum-based)
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │          apps/llm-roadmap (THE BINARY)        │
//! │                                               │
//! │    ┌─────────────┐        ┌─────────────┐     │
//! │    │    CLI      │        │  HTTP API   │     │
//! │    │   (clap)    │        │   (axum)    │     │
//! │    └──────┬──────┘        └──────┬──────┘     │
//! │           └───────────┬──────────┘            │
//! │                       ▼                       │
//! │             ┌──────────────────┐              │
//! │             │ llm-roadmap-core │              │
//! │             │  (THE CATALOG)   │              │
//! │             └──────────────────┘              │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Browse the curriculum
//! llm-roadmap
//! llm-roadmap stage tokenization
//! llm-roadmap nav tokenization
//!
//! # Start the HTTP server
//! llm-roadmap server --host 0.0.0.0 --port 8080
//! ```

use clap::Parser;
use llm_roadmap::cli;
use llm_roadmap::config::LogFormat;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    // ROADMAP_LOG_FORMAT=json enables machine-parseable output.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "llm_roadmap=info,tower_http=debug".into());

    match LogFormat::from_env() {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    let cli = cli::Cli::parse();

    // The banner would corrupt JSON output
    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    if let Err(e) = cli::execute(cli).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the startup banner.
fn print_banner() {
    println!(
        r#"
  LLM Roadmap v{}

  Research • Data • Architecture • Training • Alignment • Deployment
"#,
        env!("CARGO_PKG_VERSION")
    );
}
