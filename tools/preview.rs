//! Preview: generate names from the command line.
//!
//! Usage: preview [--count <n>] [--seed <n>] [--mode character|hyphenated]
//!                [--lexicon <file.ron>] [--profile <file.ron>] [--stats <n>]

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use std::path::PathBuf;

use name_composer::core::engine::NameEngine;
use name_composer::schema::tier::FragmentTier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Fantasy character names, e.g. "Thalmorheart the Bold".
    Character,
    /// GitHub-style handles, e.g. "daring-narwhal".
    Hyphenated,
}

#[derive(Parser)]
#[command(name = "preview", about = "Generate procedural fantasy names")]
struct Cli {
    /// Number of names to print.
    #[arg(short = 'n', long, default_value_t = 10)]
    count: usize,

    /// Seed for reproducible output. Defaults to OS entropy.
    #[arg(long)]
    seed: Option<u64>,

    /// Which composition mode to use.
    #[arg(long, value_enum, default_value_t = Mode::Character)]
    mode: Mode,

    /// Lexicon RON file replacing the built-in word lists.
    #[arg(long)]
    lexicon: Option<PathBuf>,

    /// Probability profile RON file, e.g. `(middle: 0.7, title: 0.4)`.
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Instead of printing names, sample this many and report roll rates.
    #[arg(long)]
    stats: Option<usize>,

    /// Enable debug logging.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut builder = NameEngine::builder();
    if let Some(seed) = cli.seed {
        builder = builder.seed(seed);
    }
    if let Some(ref path) = cli.lexicon {
        builder = builder.lexicon_path(path);
    }
    if let Some(ref path) = cli.profile {
        builder = builder.profile_path(path);
    }
    let mut engine = builder.build().context("failed to build name engine")?;

    if let Some(samples) = cli.stats {
        print_stats(&mut engine, samples);
        return Ok(());
    }

    for _ in 0..cli.count {
        let name = match cli.mode {
            Mode::Character => engine.generate(),
            Mode::Hyphenated => engine.generate_hyphenated(),
        };
        println!("{name}");
    }
    info!("generated {} names", engine.generation_count());

    Ok(())
}

fn print_stats(engine: &mut NameEngine, samples: usize) {
    if samples == 0 {
        println!("No samples requested.");
        return;
    }

    let mut middle_rolls = 0usize;
    let mut visible_middles = 0usize;
    let mut title_rolls = 0usize;
    let mut visible_titles = 0usize;
    let mut total_len = 0usize;

    for _ in 0..samples {
        let name = engine.compose();
        middle_rolls += usize::from(name.middle_rolled);
        visible_middles += usize::from(!name.middle.is_empty());
        title_rolls += usize::from(name.title_rolled);
        visible_titles += usize::from(name.has_title());
        total_len += name.core_word().len();
    }

    let rate = |count: usize| count as f64 / samples as f64;
    let probabilities = engine.probabilities();
    let lexicon = engine.lexicon();

    println!("=== Composition Stats ({samples} samples) ===\n");
    for tier in FragmentTier::ALL {
        let set = lexicon.tier(tier);
        println!(
            "  {:<10} {:>4} entries ({} empty)",
            tier.name(),
            set.len(),
            set.empty_count()
        );
    }
    println!();
    println!(
        "  middle roll:    {:.4} (configured {:.2})",
        rate(middle_rolls),
        probabilities.middle
    );
    println!("  visible middle: {:.4}", rate(visible_middles));
    println!(
        "  title roll:     {:.4} (configured {:.2})",
        rate(title_rolls),
        probabilities.title
    );
    println!("  visible title:  {:.4}", rate(visible_titles));
    println!(
        "  mean core len:  {:.2} (minimum {})",
        total_len as f64 / samples as f64,
        lexicon.min_core_len()
    );
}
