//! Configuration schema: global settings plus the rule sequence.
//!
//! Key names mirror the configuration documents users already write
//! (`StylesPath`, `MinWordCount`, `Formats`, `Rules`), so the same file
//! loads from YAML or TOML without translation.

use crate::models::{Action, Severity};
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Deserialize, Debug, Default, Clone)]
/// Root configuration document.
pub struct Config {
    #[serde(rename = "StylesPath", default)]
    pub styles_path: Option<String>,
    /// Reserved for length-based rules; parsed and surfaced, not yet enforced.
    #[serde(rename = "MinWordCount", default)]
    pub min_word_count: Option<usize>,
    /// Format-to-parser bindings. Informational; the qualifying extension
    /// set for file discovery is fixed (see `lint::SUPPORTED_EXTENSIONS`).
    #[serde(rename = "Formats", default)]
    pub formats: HashMap<String, Format>,
    #[serde(rename = "Rules", default)]
    pub rules: Vec<RuleSpec>,
}

#[derive(Deserialize, Debug, Default, Clone)]
/// A named document format and the parser it binds to.
pub struct Format {
    #[serde(rename = "Extensions", default)]
    pub extensions: Vec<String>,
    #[serde(rename = "Parser", default)]
    pub parser: String,
}

#[derive(Deserialize, Debug, Clone)]
/// One rule entry from the `Rules` sequence.
///
/// `Message` and `Suggestion` are templates rendered per match; `{text}`
/// expands to the matched substring and `{product}` to the inferred product
/// name. Rules without templates fall back to `Description` and a generic
/// suggestion, so user-authored rules work without engine changes.
pub struct RuleSpec {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Description", default)]
    pub description: String,
    #[serde(rename = "Pattern")]
    pub pattern: String,
    /// Rewrite template. Parsed for forward compatibility; auto-fix is
    /// deliberately not implemented.
    #[serde(rename = "Replacement", default)]
    pub replacement: Option<String>,
    #[serde(rename = "Severity", default)]
    pub severity: Severity,
    #[serde(rename = "Type", default)]
    pub action: Action,
    #[serde(rename = "Message", default)]
    pub message: Option<String>,
    #[serde(rename = "Suggestion", default)]
    pub suggestion: Option<String>,
}
