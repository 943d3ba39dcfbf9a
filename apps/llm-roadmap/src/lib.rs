//! # llm-roadmap
//!
//! Library half of the LLM roadmap binary: the CLI, the HTTP API and the
//! environment-driven server configuration. Exposed as a library so the
//! integration tests can drive the router and the command renderers.

pub mod api;
pub mod cli;
pub mod config;
