//! Integration tests for the convert command (CLI)

use tempfile::TempDir;

use crate::helpers::{fixtures_dir, load_fixture, run_itc, run_itc_stdin};

/// Theme expected for tests/fixtures/sample.itermcolors.
const SAMPLE_THEME: &str = "colors:\n\
\x20 background: 000000FF\n\
\x20 foreground: FFFFFFFF\n\
\x20 cursor: CCCCCCFF\n\
terminal:\n\
\x20 ansi:\n\
\x20   - 000000FF\n\
\x20   - 800000FF\n\
\x20   - CCCCCCFF\n";

#[test]
fn convert_help_exits_0_and_shows_usage() {
    let (stdout, _stderr, exit_code) = run_itc(&["convert", "--help"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Convert an iTerm2 color scheme"));
    assert!(stdout.contains("--output"));
    assert!(stdout.contains("--copy"));
}

#[test]
fn convert_fixture_writes_theme_to_stdout() {
    let fixture = fixtures_dir().join("sample.itermcolors");
    let (stdout, stderr, exit_code) = run_itc(&["convert", fixture.to_str().unwrap()]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert_eq!(stdout, SAMPLE_THEME);
}

#[test]
fn convert_reads_piped_stdin() {
    let source = load_fixture("sample.itermcolors");
    let (stdout, stderr, exit_code) = run_itc_stdin(&["convert"], &source);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert_eq!(stdout, SAMPLE_THEME);
}

#[test]
fn convert_output_is_deterministic() {
    let fixture = fixtures_dir().join("sample.itermcolors");
    let (first, _, _) = run_itc(&["convert", fixture.to_str().unwrap()]);
    let (second, _, _) = run_itc(&["convert", fixture.to_str().unwrap()]);

    assert_eq!(first, second);
}

#[test]
fn convert_writes_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let theme_path = temp_dir.path().join("theme.yaml");
    let fixture = fixtures_dir().join("sample.itermcolors");

    let (stdout, stderr, exit_code) = run_itc(&[
        "convert",
        fixture.to_str().unwrap(),
        "--output",
        theme_path.to_str().unwrap(),
    ]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert!(stdout.is_empty(), "theme should go to the file, not stdout");
    assert!(stderr.contains("Wrote theme to"));
    assert_eq!(std::fs::read_to_string(&theme_path).unwrap(), SAMPLE_THEME);
}

#[test]
fn convert_nonexistent_file_exits_nonzero_with_helpful_error() {
    let (_stdout, stderr, exit_code) = run_itc(&["convert", "nonexistent.itermcolors"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Failed to read"));
    assert!(stderr.contains("nonexistent.itermcolors"));
}

#[test]
fn convert_rejects_unstructured_stdin() {
    let (stdout, stderr, exit_code) = run_itc_stdin(&["convert"], "plain text, no structure");

    assert_eq!(exit_code, 1);
    assert!(stdout.is_empty(), "no partial output on failure");
    assert!(stderr.contains("Conversion failed"));
    assert!(stderr.contains("Malformed source document"));
}

#[test]
fn convert_empty_stdin_fails() {
    let (stdout, _stderr, exit_code) = run_itc_stdin(&["convert"], "");

    assert_eq!(exit_code, 1);
    assert!(stdout.is_empty());
}

#[test]
fn convert_with_copy_flag_still_delivers_theme() {
    let fixture = fixtures_dir().join("sample.itermcolors");
    let (stdout, stderr, exit_code) =
        run_itc(&["convert", fixture.to_str().unwrap(), "--copy"]);

    // Copy degrades to a warning when no clipboard tool exists, so the
    // conversion itself must succeed either way.
    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert_eq!(stdout, SAMPLE_THEME);
    assert!(
        stderr.contains("Copied theme to clipboard") || stderr.contains("Warning:"),
        "expected copy status on stderr, got: {}",
        stderr
    );
}
