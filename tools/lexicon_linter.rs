//! Lexicon Linter: validates lexicon files and reports content warnings.
//!
//! Usage: lexicon_linter <file.ron>... [--max-empty-share <0..1>]

use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process;

use name_composer::schema::lexicon::Lexicon;
use name_composer::schema::tier::FragmentTier;

#[derive(Parser)]
#[command(name = "lexicon_linter", about = "Validate name-composer lexicon files")]
struct Cli {
    /// Lexicon RON files to check.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Warn when a tier's share of empty entries exceeds this value.
    #[arg(long, default_value_t = 0.5, value_parser = parse_share)]
    max_empty_share: f64,
}

fn parse_share(raw: &str) -> Result<f64, String> {
    let share: f64 = raw.parse().map_err(|e| format!("{e}"))?;
    if (0.0..=1.0).contains(&share) {
        Ok(share)
    } else {
        Err(format!("{share} is not within [0.0, 1.0]"))
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let mut error_count = 0usize;
    let mut warning_count = 0usize;

    for path in &cli.files {
        println!("=== {} ===", path.display());
        match lint_file(path, cli.max_empty_share) {
            Ok(warnings) => {
                if warnings.is_empty() {
                    println!("All checks passed!");
                }
                for warning in &warnings {
                    println!("WARNING: {}", warning);
                }
                warning_count += warnings.len();
            }
            Err(e) => {
                eprintln!("ERROR: {}", e);
                error_count += 1;
            }
        }
        println!();
    }

    println!(
        "Summary: {} errors, {} warnings",
        error_count, warning_count
    );

    if error_count > 0 {
        process::exit(1);
    }
    Ok(())
}

fn lint_file(path: &Path, max_empty_share: f64) -> Result<Vec<String>> {
    let lexicon = Lexicon::load_from_ron(path)?;
    let mut warnings = Vec::new();

    for tier in FragmentTier::ALL {
        let set = lexicon.tier(tier);
        println!(
            "  {:<10} {:>4} entries ({} empty)",
            tier.name(),
            set.len(),
            set.empty_count()
        );

        for dupe in set.duplicates() {
            warnings.push(format!("tier '{}' repeats {:?}", tier, dupe));
        }

        if tier.allows_empty() {
            let share = set.empty_count() as f64 / set.len() as f64;
            if share > max_empty_share {
                warnings.push(format!(
                    "tier '{}' is {:.0}% empty entries",
                    tier,
                    share * 100.0
                ));
            }
            if set.empty_count() == set.len() {
                warnings.push(format!("tier '{}' can never contribute text", tier));
            }
        }
    }

    Ok(warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_bounds_are_inclusive() {
        assert_eq!(parse_share("0"), Ok(0.0));
        assert_eq!(parse_share("1.0"), Ok(1.0));
        assert_eq!(parse_share("0.25"), Ok(0.25));
    }

    #[test]
    fn share_outside_unit_interval_rejected() {
        assert!(parse_share("-0.1").is_err());
        assert!(parse_share("1.5").is_err());
        assert!(parse_share("NaN").is_err());
        assert!(parse_share("half").is_err());
    }
}
