//! # Roadmap CLI Module
//!
//! This module implements the CLI interface for the roadmap.
//!
//! ## Available Commands
//!
//! - `roadmap` - Show all phases and their stages (default)
//! - `stage` - Show one stage in detail
//! - `nav` - Show previous/next stage and progress
//! - `phase` - List the stages of one phase
//! - `progress` - Show progress through the curriculum
//! - `search` - Find stages by title or topic
//! - `validate` - Validate a catalog file
//! - `export` - Write the catalog as TOML or JSON
//! - `server` - Start the HTTP server

mod commands;

use clap::{Parser, Subcommand};
use llm_roadmap_core::RoadmapError;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// LLM Roadmap - how Large Language Models are built, stage by stage.
#[derive(Parser, Debug)]
#[command(name = "llm-roadmap")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Load the catalog from a TOML or JSON file instead of the built-in one
    #[arg(short = 'c', long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show all phases and their stages
    Roadmap,

    /// Show one stage in detail
    Stage {
        /// Stage slug, e.g. "tokenization"
        slug: String,
    },

    /// Show previous/next stage and progress for a stage
    Nav {
        /// Stage slug
        slug: String,
    },

    /// List the stages of one phase
    Phase {
        /// Phase number
        #[arg(allow_negative_numbers = true)]
        number: i64,
    },

    /// Show progress through the curriculum at a stage
    Progress {
        /// Stage slug
        slug: String,
    },

    /// Find stages by title, subtitle or key topic
    Search {
        /// Search term (case-insensitive)
        term: String,
    },

    /// Validate the catalog and report its size
    Validate,

    /// Write the catalog in the catalog file format
    Export {
        /// Output file path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Export format (toml, json)
        #[arg(short = 't', long, default_value = "toml")]
        format: String,
    },

    /// Start HTTP server
    Server {
        /// Host to bind to
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), RoadmapError> {
    let catalog = load_catalog(cli.catalog.as_deref())?;
    let json_mode = cli.json_mode;

    if cli.verbose {
        tracing::info!(
            "Catalog loaded: {} stages in {} phases",
            catalog.len(),
            catalog.phases().len()
        );
    }

    match cli.command {
        Some(Commands::Server { host, port }) => cmd_server(catalog, &host, port).await,
        Some(Commands::Roadmap) | None => cmd_roadmap(&catalog, json_mode),
        Some(Commands::Stage { slug }) => cmd_stage(&catalog, json_mode, &slug),
        Some(Commands::Nav { slug }) => cmd_nav(&catalog, json_mode, &slug),
        Some(Commands::Phase { number }) => cmd_phase(&catalog, json_mode, number),
        Some(Commands::Progress { slug }) => cmd_progress(&catalog, json_mode, &slug),
        Some(Commands::Search { term }) => cmd_search(&catalog, json_mode, &term),
        Some(Commands::Validate) => cmd_validate(&catalog, json_mode, cli.catalog.as_deref()),
        Some(Commands::Export { output, format }) => {
            cmd_export(&catalog, output.as_deref(), &format)
        }
    }
}
