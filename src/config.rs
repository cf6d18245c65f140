//! Configuration loading and the built-in default rule set.
//!
//! `load_config(None)` returns the built-in defaults as a plain value; there
//! is no hidden global state, so independent rule sets can coexist in one
//! process. With a path, the file is parsed as YAML, or as TOML when the
//! extension says so. A file that does not parse is a fatal `ConfigError`;
//! individually broken rule patterns are not — they surface later, at
//! compile time, as skipped rules.

use crate::errors::ConfigError;
use crate::models::config::{Config, Format, RuleSpec};
use crate::models::{Action, Severity};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Load a configuration document, or the built-in defaults without a path.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let Some(path) = path else {
        return Ok(default_config());
    };
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if path.extension().and_then(|e| e.to_str()) == Some("toml") {
        toml::from_str(&raw).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    } else {
        serde_yaml::from_str(&raw).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn rule(
    name: &str,
    description: &str,
    pattern: &str,
    severity: Severity,
    action: Action,
    message: &str,
    suggestion: Option<&str>,
) -> RuleSpec {
    RuleSpec {
        name: name.to_string(),
        description: description.to_string(),
        pattern: pattern.to_string(),
        replacement: None,
        severity,
        action,
        message: Some(message.to_string()),
        suggestion: suggestion.map(str::to_string),
    }
}

/// The built-in rule set covering the six AI-readability categories.
pub fn default_config() -> Config {
    let formats = HashMap::from([
        (
            "markdown".to_string(),
            Format {
                extensions: vec![".md".to_string(), ".markdown".to_string()],
                parser: "markdown".to_string(),
            },
        ),
        (
            "html".to_string(),
            Format {
                extensions: vec![".html".to_string(), ".htm".to_string()],
                parser: "html".to_string(),
            },
        ),
    ]);
    Config {
        styles_path: Some("./styles".to_string()),
        min_word_count: Some(10),
        formats,
        rules: vec![
            rule(
                "contextual-dependency",
                "Detect sections that depend on previous context",
                r"(?i)\b(this|that|these|those|above|below|previously|earlier)\b(?:\s+\w+){0,3}\s+(?:will|should|must|can|may)",
                Severity::Warning,
                Action::Suggest,
                "This text may depend on previous context. Consider making it self-contained.",
                Some("Replace contextual references with specific details"),
            ),
            rule(
                "semantic-discoverability",
                "Ensure product names are included in relevant sections",
                r"^##+\s+(?:Configure|Setup|Install|Enable)\s+\w+(?:\s+\w+)*$",
                Severity::Suggestion,
                Action::Suggest,
                "Consider including product name for better AI discoverability.",
                None,
            ),
            rule(
                "implicit-knowledge",
                "Detect assumed knowledge without explanation",
                r"(?i)\b(?:simply|just|obviously|clearly|of course|naturally)\b",
                Severity::Warning,
                Action::Suggest,
                "Avoid assuming user knowledge. Provide explicit context.",
                Some("Replace assumption words with explicit explanations"),
            ),
            rule(
                "visual-dependency",
                "Detect references to visual elements without text alternatives",
                r"(?i)(?:see\s+(?:the\s+)?(?:diagram|image|figure|chart|screenshot)(?:\s+(?:above|below))?|(?:above|below)\s+(?:image|diagram|figure))",
                Severity::Error,
                Action::Flag,
                "Visual reference detected. Provide text alternative.",
                Some("Add text description alongside visual reference"),
            ),
            rule(
                "generic-headings",
                "Detect generic headings that lack context",
                r"^##+\s+(?:Overview|Introduction|Getting Started|Configuration|Setup|Installation)$",
                Severity::Suggestion,
                Action::Suggest,
                "Generic heading detected. Add specific context.",
                Some("Add product/feature name to heading"),
            ),
            rule(
                "incomplete-context",
                "Detect incomplete procedural instructions",
                r"(?i)^(?:\d+\.\s*|[-*]\s*)?(?:\w+\s+)?(?:configure|set up|enable|disable|update|modify)\s+\w+(?:\s+\w+)*\.?\s*$",
                Severity::Warning,
                Action::Suggest,
                "Instruction may lack sufficient context. Include prerequisites and specific steps.",
                Some("Include prerequisite steps and specific system/location details"),
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleSet;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_default_rules_all_compile() {
        let config = default_config();
        assert_eq!(config.rules.len(), 6);
        let (set, skipped) = RuleSet::compile(&config);
        assert_eq!(set.rules.len(), 6);
        assert!(skipped.is_empty());
        assert_eq!(set.min_word_count, 10);
    }

    #[test]
    fn test_load_yaml_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ailint.yml");
        let mut f = fs::File::create(&path).unwrap();
        writeln!(
            f,
            "{}",
            r#"
StylesPath: ./styles
MinWordCount: 25
Formats:
  markdown:
    Extensions: [".md"]
    Parser: markdown
Rules:
  - Name: no-passive-intro
    Description: Flag passive introductions
    Pattern: '(?i)\bit is assumed\b'
    Severity: error
    Type: flag
    Message: "Found '{text}'"
"#
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.min_word_count, Some(25));
        assert_eq!(config.rules.len(), 1);
        assert_eq!(config.rules[0].name, "no-passive-intro");
        assert_eq!(config.rules[0].severity, Severity::Error);
        assert_eq!(config.rules[0].action, Action::Flag);
        assert_eq!(config.rules[0].message.as_deref(), Some("Found '{text}'"));
    }

    #[test]
    fn test_load_toml_config_and_type_alias() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ailint.toml");
        let mut f = fs::File::create(&path).unwrap();
        writeln!(
            f,
            "{}",
            r#"
MinWordCount = 5

[[Rules]]
Name = "shouting"
Description = "Flag all-caps words"
Pattern = '\b[A-Z]{4,}\b'
Severity = "warning"
Type = "error"
"#
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.rules.len(), 1);
        // "error" is a legacy alias for the flag action kind.
        assert_eq!(config.rules[0].action, Action::Flag);
    }

    #[test]
    fn test_unparsable_config_is_fatal() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.yml");
        fs::write(&path, "Rules: [unclosed").unwrap();
        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Yaml { .. }));
    }

    #[test]
    fn test_missing_config_file_is_fatal() {
        let err = load_config(Some(Path::new("/nonexistent/ailint.yml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_independent_rule_sets_coexist() {
        let (a, _) = RuleSet::compile(&default_config());
        let (b, _) = RuleSet::compile(&default_config());
        assert_eq!(a.rules.len(), b.rules.len());
    }
}
