//! Per-line rule application.
//!
//! Every compiled rule is applied to every line independently and
//! exhaustively: one line may produce matches from several rules and several
//! matches from the same rule. Rule order in the `RuleSet` determines match
//! order within a line; it carries no priority and never short-circuits.

use crate::rules::RuleSet;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A located occurrence of one rule's pattern within one line.
pub struct Match {
    /// Index into `RuleSet::rules`.
    pub rule: usize,
    /// Zero-based line number.
    pub line: usize,
    /// 1-based column: byte offset of the match start plus one.
    pub column: usize,
    /// The exact matched substring.
    pub text: String,
}

/// Collect all non-overlapping matches of every rule in one line.
pub fn scan_line(line: &str, line_number: usize, rules: &RuleSet) -> Vec<Match> {
    let mut matches = Vec::new();
    for (rule, compiled) in rules.rules.iter().enumerate() {
        for m in compiled.regex.find_iter(line) {
            matches.push(Match {
                rule,
                line: line_number,
                column: m.start() + 1,
                text: m.as_str().to_string(),
            });
        }
    }
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_config;

    fn default_rules() -> RuleSet {
        let (set, skipped) = RuleSet::compile(&default_config());
        assert!(skipped.is_empty());
        set
    }

    fn rule_name<'a>(rules: &'a RuleSet, m: &Match) -> &'a str {
        &rules.rules[m.rule].name
    }

    #[test]
    fn test_no_matching_rule_yields_nothing() {
        let rules = default_rules();
        assert!(scan_line("Plain descriptive text here.", 0, &rules).is_empty());
    }

    #[test]
    fn test_column_is_byte_offset_plus_one() {
        let rules = default_rules();
        let found = scan_line("xx Simply done.", 4, &rules);
        let hit = found
            .iter()
            .find(|m| rule_name(&rules, m) == "implicit-knowledge")
            .unwrap();
        assert_eq!(hit.column, 4);
        assert_eq!(hit.line, 4);
        assert_eq!(hit.text, "Simply");
    }

    #[test]
    fn test_same_rule_twice_yields_two_matches() {
        let rules = default_rules();
        let found = scan_line("Just write it down. Simply great stuff?", 0, &rules);
        let hits: Vec<&Match> = found
            .iter()
            .filter(|m| rule_name(&rules, m) == "implicit-knowledge")
            .collect();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].column, 1);
        assert_eq!(hits[1].column, 21);
        assert_ne!(hits[0].column, hits[1].column);
    }

    #[test]
    fn test_multiple_rules_fire_on_one_line() {
        let rules = default_rules();
        let found = scan_line("Simply configure the endpoint.", 0, &rules);
        let names: Vec<&str> = found.iter().map(|m| rule_name(&rules, m)).collect();
        assert!(names.contains(&"implicit-knowledge"));
        assert!(names.contains(&"incomplete-context"));
    }
}
