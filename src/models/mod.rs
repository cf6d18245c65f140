//! Shared data models for analysis results and rule metadata.

pub mod config;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
/// Advisory severity attached to each issue.
pub enum Severity {
    Error,
    #[default]
    Warning,
    Suggestion,
}

impl Severity {
    /// Lowercase form used as a JSON key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Suggestion => "suggestion",
        }
    }

    /// Uppercase form used by the standard text output.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Suggestion => "SUGGESTION",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
/// What a rule does with a match. Advisory metadata; severity drives
/// rendering, the action kind records whether a rewrite is being proposed.
pub enum Action {
    Suggest,
    #[default]
    #[serde(alias = "error", alias = "warning")]
    Flag,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Suggest => "suggest",
            Action::Flag => "flag",
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
/// A single finding with location, severity, and generated messaging.
///
/// `column` is 1-based; structural issues that are not tied to a specific
/// column carry 0.
pub struct Issue {
    pub file: String,
    pub line: usize,
    pub column: usize,
    pub rule: String,
    pub severity: Severity,
    pub message: String,
    pub suggestion: String,
    pub original_text: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
/// Aggregated counts used by printers.
pub struct Summary {
    pub errors: usize,
    pub warnings: usize,
    pub suggestions: usize,
    pub files: usize,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
/// Lint results container: issues in discovery order plus totals.
pub struct LintResult {
    pub issues: Vec<Issue>,
    pub summary: Summary,
}
