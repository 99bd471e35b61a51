//! Tests for failures in profile inspection.
//!
//! None of these may leave anything in the dotfile.

use crate::support::*;

#[test]
fn test_unknown_key_fails_downstream() {
    let t = Test::with_files(CONFIG, AWS_CONFIG);

    let output = t.run(&["--profile", "staging"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "aws profile not found: ''");
    assert_stderr_contains(&output, "set aws_profile");
    assert!(!t.dotfile(".zshenv").exists());
}

#[test]
fn test_key_without_profile_fails() {
    let t = Test::with_files(CONFIG, AWS_CONFIG);

    let output = t.run(&["--profile", "incomplete"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "aws profile not found: ''");
}

#[test]
fn test_missing_aws_profile_fails_with_hint() {
    let t = Test::with_files(CONFIG, AWS_CONFIG);

    let output = t.run(&["--profile", "orphan"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "aws profile not found: 'does-not-exist'");
    assert_stderr_contains(&output, "~/.aws/config");
    assert!(!t.dotfile(".zshenv").exists());
}

#[test]
fn test_missing_aws_files_fail() {
    let t = Test::new();
    t.write_config(CONFIG);

    let output = t.run(&[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "aws profile not found: 'sso-dev'");
}

#[test]
fn test_malformed_aws_config_fails() {
    let t = Test::with_files(CONFIG, AWS_CONFIG_MALFORMED);

    let output = t.run(&[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "malformed aws config");
    assert!(!t.dotfile(".zshenv").exists());
}

#[test]
fn test_existing_dotfile_untouched_on_failure() {
    let t = Test::with_files(CONFIG, AWS_CONFIG);
    let dotfile = t.dotfile(".zshenv");
    std::fs::write(&dotfile, "export FOO=1\n").unwrap();

    let output = t.run(&["--profile", "orphan"]);
    assert_failure(&output);
    assert_eq!(std::fs::read_to_string(&dotfile).unwrap(), "export FOO=1\n");
}
