//! Analysis runner: per-document scanning and multi-path aggregation.
//!
//! `analyze_content` is a pure function from one document and a `RuleSet` to
//! an ordered issue list: line findings first (line order, then rule order,
//! then match order), structural findings after. `run_lint` fans out over
//! files with `rayon` and collects in input order, so output is
//! deterministic regardless of scheduling. Per-path and per-document
//! failures are isolated into warnings and never abort the batch.

use crate::errors::InputError;
use crate::models::{Issue, LintResult, Severity, Summary};
use crate::rules::RuleSet;
use crate::scan;
use crate::structure;
use glob::glob;
use rayon::prelude::*;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File extensions qualifying for analysis, lowercase, without dots.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["md", "markdown", "html", "htm", "txt", "rst"];

/// Analyze one document. Stateless; the file identifier is opaque.
pub fn analyze_content(file: &str, content: &str, rules: &RuleSet) -> Vec<Issue> {
    let mut issues = Vec::new();
    for (line_number, line) in content.lines().enumerate() {
        for m in scan::scan_line(line, line_number, rules) {
            let rule = &rules.rules[m.rule];
            issues.push(Issue {
                file: file.to_string(),
                line: line_number + 1,
                column: m.column,
                rule: rule.name.clone(),
                severity: rule.severity,
                message: rule.message_for(&m.text),
                suggestion: rule.suggestion_for(&m.text),
                original_text: m.text,
            });
        }
    }
    for finding in structure::scan_document(content) {
        issues.push(Issue {
            file: file.to_string(),
            line: finding.line,
            column: 0,
            rule: finding.rule.to_string(),
            severity: finding.severity,
            message: finding.message,
            suggestion: finding.suggestion,
            original_text: finding.text,
        });
    }
    issues
}

/// Whether a path qualifies by extension.
pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| SUPPORTED_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Run lint across the given files and directories.
///
/// Directories contribute their qualifying files (recursively with
/// `recursive`), sorted for reproducible order; explicit file paths are
/// taken as-is when they qualify. Issues concatenate in input order.
pub fn run_lint(paths: &[String], recursive: bool, rules: &RuleSet) -> (LintResult, Vec<InputError>) {
    let mut warnings: Vec<InputError> = Vec::new();
    let mut targets: Vec<PathBuf> = Vec::new();
    for p in paths {
        let path = PathBuf::from(p);
        match fs::metadata(&path) {
            Err(source) => warnings.push(InputError::Path { path, source }),
            Ok(meta) if meta.is_dir() => match collect_dir(&path, recursive) {
                Ok(mut found) => targets.append(&mut found),
                Err(e) => warnings.push(e),
            },
            Ok(_) => {
                if is_supported(&path) {
                    targets.push(path);
                }
            }
        }
    }

    // Documents are independent; parallel map, order preserved by collect.
    let per_file: Vec<Result<Vec<Issue>, InputError>> = targets
        .par_iter()
        .map(|path| {
            let content = fs::read_to_string(path).map_err(|source| InputError::Document {
                path: path.clone(),
                source,
            })?;
            Ok(analyze_content(&path.to_string_lossy(), &content, rules))
        })
        .collect();

    let mut issues: Vec<Issue> = Vec::new();
    let mut files = 0usize;
    for outcome in per_file {
        match outcome {
            Ok(mut found) => {
                files += 1;
                issues.append(&mut found);
            }
            Err(e) => warnings.push(e),
        }
    }

    let summary = summarize(&issues, files);
    (LintResult { issues, summary }, warnings)
}

fn summarize(issues: &[Issue], files: usize) -> Summary {
    let mut errors = 0usize;
    let mut warnings = 0usize;
    let mut suggestions = 0usize;
    for issue in issues {
        match issue.severity {
            Severity::Error => errors += 1,
            Severity::Warning => warnings += 1,
            Severity::Suggestion => suggestions += 1,
        }
    }
    Summary {
        errors,
        warnings,
        suggestions,
        files,
    }
}

fn collect_dir(dir: &Path, recursive: bool) -> Result<Vec<PathBuf>, InputError> {
    let pattern = dir
        .join(if recursive { "**/*" } else { "*" })
        .to_string_lossy()
        .to_string();
    let entries = glob(&pattern).map_err(|e| InputError::Path {
        path: dir.to_path_buf(),
        source: io::Error::new(io::ErrorKind::InvalidInput, e),
    })?;
    let mut found: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .filter(|p| p.is_file() && is_supported(p))
        .collect();
    found.sort();
    Ok(found)
}
