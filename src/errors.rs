//! Error taxonomy for configuration, rule compilation, and input handling.
//!
//! `ConfigError` is fatal: without a valid configuration there is nothing to
//! analyze. `RuleError` and `InputError` are isolated per rule or per path;
//! they are reported on stderr and never abort the batch.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
/// Configuration file could not be read or parsed.
pub enum ConfigError {
    #[error("cannot read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("config file {} is not valid YAML: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("config file {} is not valid TOML: {source}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Error)]
/// A single rule entry was rejected at compile time. The rule is excluded
/// for the whole run; remaining rules are unaffected.
pub enum RuleError {
    #[error("rule '{rule}' has an invalid pattern and was skipped: {source}")]
    Pattern {
        rule: String,
        #[source]
        source: regex::Error,
    },
    #[error("rule entry {index} has an empty name and was skipped")]
    Unnamed { index: usize },
    #[error("duplicate rule name '{rule}'; later entry skipped")]
    Duplicate { rule: String },
}

#[derive(Debug, Error)]
/// A supplied path or an individual document could not be used. Reported as
/// a warning; the failed input contributes zero issues.
pub enum InputError {
    #[error("cannot access {}: {source}", path.display())]
    Path {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read {}: {source}", path.display())]
    Document {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
