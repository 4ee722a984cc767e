//! Tavern Roster demo: a seeded party of adventurers plus their guild
//! handles, showing the raw draws behind each name.
//!
//! Run with: cargo run --example tavern_roster

use name_composer::core::composer::NameComposer;
use name_composer::core::engine::NameEngine;
use name_composer::core::random::ScriptedSource;
use name_composer::schema::lexicon::Lexicon;

fn main() {
    let mut engine = NameEngine::builder()
        .seed(2026)
        .build()
        .expect("Failed to build engine");

    println!("=== The Gilded Flagon: tonight's roster ===\n");
    for seat in 1..=8 {
        let name = engine.compose();
        let middle = if !name.middle_rolled {
            "(no roll)".to_string()
        } else if name.middle.is_empty() {
            "(rolled empty)".to_string()
        } else {
            name.middle.clone()
        };
        println!(
            "{seat}. {:<36} [{} + {} + {}]",
            name.to_string(),
            name.prefix,
            middle,
            name.suffix
        );
    }

    println!("\n=== Guild handles ===\n");
    for _ in 0..4 {
        println!("  {}", engine.generate_hyphenated());
    }

    // Pinned draws: every index 0, every roll succeeds.
    let lexicon = Lexicon::builtin();
    let composer = NameComposer::new(&lexicon);
    let mut pinned = ScriptedSource::new();
    println!("\n=== Pinned draws ===\n");
    println!("  {}", composer.generate(&mut pinned));
    println!("  {}", composer.generate_hyphenated(&mut pinned));

    println!("\n=== Sea raiders lexicon ===\n");
    let mut raiders = NameEngine::builder()
        .seed(7)
        .lexicon_path("lexicon_data/sea_raiders.ron")
        .build()
        .expect("Failed to load sea raiders lexicon");
    for name in raiders.generate_batch(5) {
        println!("  {name}");
    }
}
