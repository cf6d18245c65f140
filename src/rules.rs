//! Rule compilation and message/suggestion templating.
//!
//! A `RuleSet` is built once per run from a `Config` and never mutated
//! afterwards. Pattern compilation happens here, not per line: a rule whose
//! pattern fails to compile is excluded for the whole run and reported as a
//! `RuleError`, while the remaining rules keep matching. One bad rule must
//! not abort an analysis run.

use crate::errors::RuleError;
use crate::models::config::Config;
use crate::models::{Action, Severity};
use regex::Regex;
use std::collections::HashSet;

/// Suggestion used for rules that carry no template of their own.
pub const FALLBACK_SUGGESTION: &str = "Consider rewriting for AI clarity";

/// Stands in for `{product}` when no candidate product name was inferred.
pub const PRODUCT_PLACEHOLDER: &str = "[PRODUCT_NAME]";

/// A rule whose pattern compiled successfully, ready for matching.
pub struct CompiledRule {
    pub name: String,
    pub description: String,
    pub severity: Severity,
    pub action: Action,
    pub replacement: Option<String>,
    pub message: Option<String>,
    pub suggestion: Option<String>,
    pub regex: Regex,
}

impl CompiledRule {
    /// Render the message for a match. Falls back to the rule description.
    pub fn message_for(&self, text: &str) -> String {
        match &self.message {
            Some(tpl) => render_template(tpl, text, None),
            None => self.description.clone(),
        }
    }

    /// Render the suggestion for a match. Falls back to a generic rewrite hint.
    pub fn suggestion_for(&self, text: &str) -> String {
        match &self.suggestion {
            Some(tpl) => render_template(tpl, text, None),
            None => FALLBACK_SUGGESTION.to_string(),
        }
    }
}

/// Expand `{text}` and `{product}` placeholders in a template.
pub fn render_template(template: &str, text: &str, product: Option<&str>) -> String {
    template
        .replace("{text}", text)
        .replace("{product}", product.unwrap_or(PRODUCT_PLACEHOLDER))
}

/// The full configured rule collection plus global settings.
pub struct RuleSet {
    pub rules: Vec<CompiledRule>,
    /// Reserved for length-based rules.
    pub min_word_count: usize,
}

impl RuleSet {
    /// Compile every rule entry in the config.
    ///
    /// Entries with an empty or duplicate name, or a pattern that does not
    /// compile, are skipped and returned as `RuleError`s for reporting.
    /// Rule order is preserved; it determines issue ordering within a line.
    pub fn compile(config: &Config) -> (RuleSet, Vec<RuleError>) {
        let mut rules = Vec::new();
        let mut skipped = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        for (index, spec) in config.rules.iter().enumerate() {
            if spec.name.is_empty() {
                skipped.push(RuleError::Unnamed { index });
                continue;
            }
            if !seen.insert(spec.name.clone()) {
                skipped.push(RuleError::Duplicate {
                    rule: spec.name.clone(),
                });
                continue;
            }
            match Regex::new(&spec.pattern) {
                Ok(regex) => rules.push(CompiledRule {
                    name: spec.name.clone(),
                    description: spec.description.clone(),
                    severity: spec.severity,
                    action: spec.action,
                    replacement: spec.replacement.clone(),
                    message: spec.message.clone(),
                    suggestion: spec.suggestion.clone(),
                    regex,
                }),
                Err(source) => skipped.push(RuleError::Pattern {
                    rule: spec.name.clone(),
                    source,
                }),
            }
        }
        let set = RuleSet {
            rules,
            min_word_count: config.min_word_count.unwrap_or(0),
        };
        (set, skipped)
    }
}
