//! Integration tests for the completions command (CLI)

use crate::helpers::run_itc;

#[test]
fn generates_bash_completions() {
    let (stdout, _stderr, exit_code) = run_itc(&["completions", "bash"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("itc"));
    assert!(stdout.contains("convert"));
}

#[test]
fn generates_zsh_completions() {
    let (stdout, _stderr, exit_code) = run_itc(&["completions", "zsh"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("itc"));
}

#[test]
fn rejects_unknown_shell() {
    let (_stdout, stderr, exit_code) = run_itc(&["completions", "tcsh"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("invalid value"));
}
