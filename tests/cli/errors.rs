//! Tests for CLI flags and top-level error reporting.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_help_lists_flags() {
    let t = Test::new();

    t.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--region"))
        .stdout(predicate::str::contains("--profile"))
        .stdout(predicate::str::contains("--dotfile"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn test_help_shows_defaults() {
    let t = Test::new();

    t.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("eu-central-1"))
        .stdout(predicate::str::contains(".zshenv"));
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.run(&["--version"]);
    assert_success(&output);
    assert_stdout_contains(&output, "awsconf");
}

#[test]
fn test_unknown_flag_fails() {
    let t = Test::new();

    let output = t.run(&["--no-such-flag"]);
    assert_failure(&output);
}

#[test]
fn test_error_exit_code_is_one() {
    let t = Test::new();

    t.cmd().assert().failure().code(1);
}

#[test]
fn test_verbose_flag_accepted() {
    let t = Test::new();

    // Fails on the missing config, but the flag itself must parse.
    let output = t.run(&["--verbose"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "config file not found");
}

#[test]
fn test_default_no_log_output() {
    let t = Test::with_files(CONFIG, AWS_CONFIG);

    let output = t.run(&["--profile", "orphan"]);
    assert_failure(&output);

    let err = stderr(&output);
    assert!(
        !err.contains("DEBUG") && !err.contains("TRACE"),
        "Default mode should not show debug/trace output"
    );
}

#[test]
fn test_log_env_var_enables_debug() {
    let t = Test::with_files(CONFIG, AWS_CONFIG);

    let output = t
        .cmd()
        .env("AWSCONF_LOG", "awsconf=debug")
        .args(["--profile", "orphan"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "inspecting aws profile");
}
