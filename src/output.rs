//! Output rendering for lint results.
//!
//! Supports `standard` (default), `json`, and `sarif` encodings. The JSON
//! form carries every issue plus a summary with totals by severity and by
//! rule; SARIF follows the 2.1.0 schema so CI integrations can ingest the
//! results directly. Diagnostics never go to stdout, so the machine-readable
//! encodings stay parseable.

use crate::models::{Issue, LintResult, Severity};
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;
use std::collections::BTreeMap;

fn use_colors(output: &str) -> bool {
    output != "json" && output != "sarif" && std::env::var_os("NO_COLOR").is_none()
}

/// Print lint results in the requested encoding.
pub fn print_lint(res: &LintResult, output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_json(res)).unwrap()
        ),
        "sarif" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_sarif(res)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            for issue in &res.issues {
                let sev = if color {
                    match issue.severity {
                        Severity::Error => issue.severity.label().red().bold().to_string(),
                        Severity::Warning => issue.severity.label().yellow().bold().to_string(),
                        Severity::Suggestion => issue.severity.label().blue().bold().to_string(),
                    }
                } else {
                    issue.severity.label().to_string()
                };
                let file = if color {
                    issue.file.clone().bold().to_string()
                } else {
                    issue.file.clone()
                };
                println!(
                    "{}:{}:{}: {} [{}] {}",
                    file, issue.line, issue.column, sev, issue.rule, issue.message
                );
                if !issue.suggestion.is_empty() {
                    println!("    Suggestion: {}", issue.suggestion);
                }
                println!();
            }
            let summary = format!(
                "— Summary — errors={} warnings={} suggestions={} files={}",
                res.summary.errors,
                res.summary.warnings,
                res.summary.suggestions,
                res.summary.files
            );
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{}", summary);
            }
        }
    }
}

/// Compose the JSON report (pure) for testing/snapshot purposes.
pub fn compose_json(res: &LintResult) -> JsonVal {
    let mut by_severity: BTreeMap<&str, usize> = BTreeMap::new();
    let mut by_rule: BTreeMap<&str, usize> = BTreeMap::new();
    for issue in &res.issues {
        *by_severity.entry(issue.severity.as_str()).or_default() += 1;
        *by_rule.entry(issue.rule.as_str()).or_default() += 1;
    }
    json!({
        "version": env!("CARGO_PKG_VERSION"),
        "issues": res.issues,
        "summary": {
            "total": res.issues.len(),
            "by_severity": by_severity,
            "by_rule": by_rule,
        }
    })
}

/// Compose a SARIF 2.1.0 log (pure) for testing/snapshot purposes.
///
/// The driver carries a rule catalog built from the issues, first-seen
/// order; each result references its rule by id and catalog index.
pub fn compose_sarif(res: &LintResult) -> JsonVal {
    let mut rule_ids: Vec<&str> = Vec::new();
    for issue in &res.issues {
        if !rule_ids.contains(&issue.rule.as_str()) {
            rule_ids.push(issue.rule.as_str());
        }
    }
    let rules: Vec<JsonVal> = rule_ids.iter().map(|id| json!({ "id": id })).collect();
    let results: Vec<JsonVal> = res
        .issues
        .iter()
        .map(|issue| {
            let index = rule_ids.iter().position(|id| *id == issue.rule).unwrap();
            sarif_result(issue, index)
        })
        .collect();
    json!({
        "$schema": "https://json.schemastore.org/sarif-2.1.0.json",
        "version": "2.1.0",
        "runs": [{
            "tool": {
                "driver": {
                    "name": "ailint",
                    "version": env!("CARGO_PKG_VERSION"),
                    "rules": rules,
                }
            },
            "results": results,
        }]
    })
}

fn sarif_result(issue: &Issue, rule_index: usize) -> JsonVal {
    let level = match issue.severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
        Severity::Suggestion => "note",
    };
    let mut region = json!({ "startLine": issue.line });
    if issue.column > 0 {
        region["startColumn"] = json!(issue.column);
    }
    json!({
        "ruleId": issue.rule,
        "ruleIndex": rule_index,
        "level": level,
        "message": { "text": issue.message },
        "locations": [{
            "physicalLocation": {
                "artifactLocation": { "uri": issue.file },
                "region": region,
            }
        }]
    })
}
