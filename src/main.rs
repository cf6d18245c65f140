//! ailint CLI binary entry point.
//! Resolves configuration, runs the analysis, and prints results.

use ailint::cli::{Cli, Commands};
use ailint::lint;
use ailint::output;
use ailint::rules::RuleSet;
use ailint::{config, utils};
use clap::Parser;
use std::path::Path;

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Lint {
            paths,
            config,
            output,
            recursive,
        } => {
            let output = output.unwrap_or_else(|| "standard".to_string());
            if paths.is_empty() {
                eprintln!(
                    "{} {}",
                    utils::error_prefix(),
                    "No input paths supplied. Pass one or more files or directories."
                );
                std::process::exit(1);
            }
            let rules = load_rules(config.as_deref());
            let (result, warnings) = lint::run_lint(&paths, recursive, &rules);
            for warning in &warnings {
                eprintln!("{} {}", utils::warn_prefix(), warning);
            }
            output::print_lint(&result, &output);
            if !result.issues.is_empty() {
                std::process::exit(1);
            }
        }
        Commands::Rules { config } => {
            let rules = load_rules(config.as_deref());
            for rule in &rules.rules {
                println!(
                    "{:<28} {:<10} {:<8} {}",
                    rule.name,
                    rule.severity.as_str(),
                    rule.action.as_str(),
                    rule.description
                );
            }
            println!("min word count: {}", rules.min_word_count);
        }
    }
}

/// Load configuration and compile the rule set, reporting skipped rules.
/// Configuration failures are fatal; there is nothing to analyze without a
/// valid rule set.
fn load_rules(config_path: Option<&str>) -> RuleSet {
    let cfg = match config::load_config(config_path.map(Path::new)) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(), e);
            std::process::exit(1);
        }
    };
    let (rules, skipped) = RuleSet::compile(&cfg);
    for err in &skipped {
        eprintln!("{} {}", utils::warn_prefix(), err);
    }
    rules
}
