//! ailint core library.
//!
//! Exposes programmatic APIs for analyzing documentation against a
//! configurable rule set and rendering the findings.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Configuration loading and the built-in default rule set.
//! - `rules`: Rule compilation and message/suggestion templating.
//! - `scan`: Per-line rule application.
//! - `structure`: Whole-document checks (heading context and hierarchy).
//! - `lint`: Per-document analysis and the multi-path runner.
//! - `models`: Data models for configuration and lint output structs.
//! - `output`: Standard/JSON/SARIF printers.
//! - `errors`: Error taxonomy.
//! - `utils`: Supporting helpers.

pub mod cli;
pub mod config;
pub mod errors;
pub mod lint;
pub mod models;
pub mod output;
pub mod rules;
pub mod scan;
pub mod structure;
pub mod utils;
