//! End-to-end runs of the lexicon_linter binary.

use std::process::{Command, Output};

fn run_linter(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lexicon_linter"))
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn valid_lexicon_passes() {
    let out = run_linter(&["lexicon_data/sea_raiders.ron"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("0 errors"));
}

#[test]
fn load_errors_go_to_stderr() {
    let out = run_linter(&["tests/fixtures/blank_prefix_lexicon.ron"]);
    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&out.stdout);
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("ERROR:"));
    assert!(!stdout.contains("ERROR:"));
}

#[test]
fn out_of_range_empty_share_rejected() {
    let out = run_linter(&["--max-empty-share=1.5", "lexicon_data/sea_raiders.ron"]);
    assert!(!out.status.success());
    let out = run_linter(&["--max-empty-share=NaN", "lexicon_data/sea_raiders.ron"]);
    assert!(!out.status.success());
}
