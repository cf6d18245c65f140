//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "ailint",
    version,
    about = "Lint documentation for AI/RAG readability",
    long_about = "ailint — flag documentation passages that confuse AI consumers: \
context-dependent phrasing, generic headings, implicit assumptions, visual-only \
references, and incomplete instructions.\n\nAll detection is deterministic pattern \
matching; no issues means exit code 0.",
    after_help = "Examples:\n  ailint lint docs/\n  ailint lint README.md guides/ --recursive\n  ailint lint docs/ --config ailint.yml --output json\n  ailint rules",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current ailint version.")]
    Version,
    /// Lint documentation files
    #[command(
        about = "Analyze files and directories",
        long_about = "Analyze the given files and directories for AI-readability issues. \
Qualifying extensions: .md, .markdown, .html, .htm, .txt, .rst. Any issue makes the \
run exit non-zero.",
        after_help = "Examples:\n  ailint lint docs/\n  ailint lint docs/ --recursive --output sarif"
    )]
    Lint {
        #[arg(help = "Files or directories to analyze")]
        paths: Vec<String>,
        #[arg(long, help = "Path to a YAML or TOML configuration file")]
        config: Option<String>,
        #[arg(long, help = "Output encoding: standard|json|sarif (default: standard)")]
        output: Option<String>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Recurse into subdirectories")]
        recursive: bool,
    },
    /// List active rules
    #[command(
        about = "List active rules",
        long_about = "Print the rules the current configuration would apply, plus the \
entries skipped because their pattern or name is invalid."
    )]
    Rules {
        #[arg(long, help = "Path to a YAML or TOML configuration file")]
        config: Option<String>,
    },
}
