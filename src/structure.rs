//! Whole-document structural checks.
//!
//! Two concerns that cannot be judged line by line:
//! - Generic headings ("Overview", "Configuration", ...) that name no
//!   product. A lightweight vocabulary of candidate product names is
//!   inferred from capitalized-token frequency across the document.
//! - Heading hierarchy skips, where a heading's level jumps more than one
//!   step past the previous heading.
//!
//! Heading line numbers are recorded during extraction, so repeated heading
//! text elsewhere in the document cannot mis-attribute an issue.

use crate::models::Severity;
use crate::rules::render_template;
use once_cell::sync::Lazy;
use regex::Regex;

pub const MISSING_PRODUCT_CONTEXT: &str = "missing-product-context";
pub const HEADING_HIERARCHY: &str = "heading-hierarchy";

static HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^(#{1,6})\s+(.+)$").expect("heading pattern"));
static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z][a-zA-Z]+\b").expect("token pattern"));

/// Capitalized words that are common prose, never product names.
const STOP_WORDS: &[&str] = &[
    "The", "This", "That", "With", "From", "Your", "When", "Where", "What", "How",
];

/// Generic heading terms that carry no product context on their own.
const GENERIC_TERMS: &[&str] = &[
    "overview",
    "introduction",
    "getting started",
    "configuration",
    "setup",
    "installation",
];

/// A candidate product name must occur this often to count.
const MIN_PRODUCT_OCCURRENCES: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A heading extracted from the document, with its origin line.
pub struct Heading {
    /// Number of leading hash markers, 1..=6.
    pub level: usize,
    /// Heading text without the markers.
    pub text: String,
    /// 1-based line number where the heading appears.
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A document-level finding, later normalized into an `Issue` with column 0.
pub struct StructuralFinding {
    pub rule: &'static str,
    pub severity: Severity,
    pub line: usize,
    pub message: String,
    pub suggestion: String,
    pub text: String,
}

/// Extract all headings, one per `#{1,6}`-marked line, in document order.
pub fn extract_headings(content: &str) -> Vec<Heading> {
    HEADING_RE
        .captures_iter(content)
        .map(|caps| {
            let whole = caps.get(0).unwrap();
            let line = content[..whole.start()]
                .bytes()
                .filter(|&b| b == b'\n')
                .count()
                + 1;
            Heading {
                level: caps[1].len(),
                text: caps[2].to_string(),
                line,
            }
        })
        .collect()
}

/// Infer candidate product names from capitalized-token frequency.
///
/// Tokens must be alphabetic, start uppercase, be longer than three
/// characters, and not be stop words; a candidate needs at least
/// `MIN_PRODUCT_OCCURRENCES` occurrences anywhere in the document. The
/// result is ordered by frequency descending, first occurrence winning ties,
/// so "most frequent" is reproducible across runs.
pub fn product_vocabulary(content: &str) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for m in TOKEN_RE.find_iter(content) {
        let word = m.as_str();
        if word.len() <= 3 || STOP_WORDS.contains(&word) {
            continue;
        }
        match counts.iter_mut().find(|(w, _)| w.as_str() == word) {
            Some((_, n)) => *n += 1,
            None => counts.push((word.to_string(), 1)),
        }
    }
    counts.retain(|(_, n)| *n >= MIN_PRODUCT_OCCURRENCES);
    // Stable sort keeps first-seen order among equal frequencies.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

fn is_generic_heading(text: &str) -> bool {
    let lower = text.to_lowercase();
    GENERIC_TERMS.iter().any(|term| lower.contains(term))
}

fn has_product_context(text: &str, products: &[(String, usize)]) -> bool {
    let lower = text.to_lowercase();
    products
        .iter()
        .any(|(name, _)| lower.contains(&name.to_lowercase()))
}

/// Run all structural checks over one document.
///
/// Findings are emitted in heading order; for each heading the hierarchy
/// check precedes the product-context check.
pub fn scan_document(content: &str) -> Vec<StructuralFinding> {
    let headings = extract_headings(content);
    if headings.is_empty() {
        return Vec::new();
    }
    let products = product_vocabulary(content);
    let top_product = products.first().map(|(name, _)| name.as_str());

    let mut findings = Vec::new();
    let mut previous_level: Option<usize> = None;
    for heading in &headings {
        if let Some(prev) = previous_level {
            if heading.level > prev + 1 {
                findings.push(StructuralFinding {
                    rule: HEADING_HIERARCHY,
                    severity: Severity::Warning,
                    line: heading.line,
                    message: format!("Heading level jumps from h{} to h{}", prev, heading.level),
                    suggestion: "Use sequential heading levels so sections keep their parent context"
                        .to_string(),
                    text: heading.text.clone(),
                });
            }
        }
        previous_level = Some(heading.level);

        if is_generic_heading(&heading.text) && !has_product_context(&heading.text, &products) {
            findings.push(StructuralFinding {
                rule: MISSING_PRODUCT_CONTEXT,
                severity: Severity::Suggestion,
                line: heading.line,
                message: "Heading lacks product-specific context".to_string(),
                suggestion: render_template(
                    "Consider adding product name: '{product} {text}'",
                    &heading.text,
                    top_product,
                ),
                text: heading.text.clone(),
            });
        }
    }
    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::PRODUCT_PLACEHOLDER;

    #[test]
    fn test_headings_keep_their_own_line_numbers() {
        // The heading text recurs verbatim in the body; line numbers must
        // come from extraction, not from a text search.
        let doc = "Intro mentions Setup first.\n\n## Setup\n\nBody repeats ## Setup inline.\n";
        let headings = extract_headings(doc);
        assert_eq!(headings.len(), 1);
        assert_eq!(headings[0].level, 2);
        assert_eq!(headings[0].text, "Setup");
        assert_eq!(headings[0].line, 3);
    }

    #[test]
    fn test_vocabulary_counts_and_ordering() {
        let doc = "Zeta and Acme. Zeta with Acme. Zeta beside Acme. Zeta again. \
                   This This This This rare Word";
        let vocab = product_vocabulary(doc);
        // "This" is a stop word, "Word" and "rare" fall short of the
        // threshold or the capitalization rule.
        assert_eq!(vocab.len(), 2);
        assert_eq!(vocab[0], ("Zeta".to_string(), 4));
        assert_eq!(vocab[1], ("Acme".to_string(), 3));
    }

    #[test]
    fn test_vocabulary_ties_break_on_first_occurrence() {
        let doc = "Beta Alfa Beta Alfa Beta Alfa";
        let vocab = product_vocabulary(doc);
        assert_eq!(vocab[0].0, "Beta");
        assert_eq!(vocab[1].0, "Alfa");
    }

    #[test]
    fn test_generic_heading_without_products_gets_placeholder() {
        let doc = "## Configuration\n\nSet values in the file.\n";
        let findings = scan_document(doc);
        let product: Vec<&StructuralFinding> = findings
            .iter()
            .filter(|f| f.rule == MISSING_PRODUCT_CONTEXT)
            .collect();
        assert_eq!(product.len(), 1);
        assert_eq!(product[0].line, 1);
        assert_eq!(product[0].severity, Severity::Suggestion);
        assert_eq!(
            product[0].suggestion,
            format!(
                "Consider adding product name: '{} Configuration'",
                PRODUCT_PLACEHOLDER
            )
        );
    }

    #[test]
    fn test_generic_heading_suggests_frequent_product() {
        let doc = "## Configuration\n\nAcme reads settings. Acme writes logs. \
                   Acme rotates files. Acme ships them.\n";
        let findings = scan_document(doc);
        let hit = findings
            .iter()
            .find(|f| f.rule == MISSING_PRODUCT_CONTEXT)
            .unwrap();
        assert!(hit.suggestion.contains("Acme"));
        assert_eq!(hit.suggestion, "Consider adding product name: 'Acme Configuration'");
    }

    #[test]
    fn test_heading_naming_the_product_is_not_flagged() {
        let doc = "## Acme Configuration\n\nAcme reads settings. Acme writes logs. \
                   Acme rotates files.\n";
        let findings = scan_document(doc);
        assert!(findings
            .iter()
            .all(|f| f.rule != MISSING_PRODUCT_CONTEXT));
    }

    #[test]
    fn test_hierarchy_skip_is_flagged() {
        let doc = "# Title\n\n### Deep Section\n";
        let findings = scan_document(doc);
        let hit = findings
            .iter()
            .find(|f| f.rule == HEADING_HIERARCHY)
            .unwrap();
        assert_eq!(hit.severity, Severity::Warning);
        assert_eq!(hit.line, 3);
        assert_eq!(hit.message, "Heading level jumps from h1 to h3");
    }

    #[test]
    fn test_sequential_and_leading_headings_pass() {
        let doc = "## Start Here\n\n### Detail\n\n# Back Up Top\n";
        let findings = scan_document(doc);
        assert!(findings.iter().all(|f| f.rule != HEADING_HIERARCHY));
    }
}
