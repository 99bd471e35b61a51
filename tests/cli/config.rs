//! Tests for resolving the awsconf config file.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_missing_config_fails_with_hint() {
    let t = Test::new();

    t.cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"))
        .stderr(predicate::str::contains(".awsconf.toml"))
        .stderr(predicate::str::contains("[aws.<key>]"));
}

#[test]
fn test_malformed_config_fails() {
    let t = Test::new();
    t.write_config("this is not valid toml { [ }");

    let output = t.run(&[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse config file");
}

#[test]
fn test_config_flag_overrides_default_location() {
    let t = Test::with_files(CONFIG, AWS_CONFIG);
    let elsewhere = t.home.path().join("elsewhere.toml");

    let output = t.run(&["--config", elsewhere.to_str().unwrap()]);
    assert_failure(&output);
    assert_stderr_contains(&output, "elsewhere.toml");
}

#[test]
fn test_config_env_var() {
    let t = Test::new();
    let custom = t.home.path().join("custom.toml");
    std::fs::write(&custom, CONFIG).unwrap();
    t.write_aws_config(AWS_CONFIG);

    let output = t
        .cmd()
        .env("AWSCONF_CONFIG", &custom)
        .args(["--profile", "orphan"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "aws profile not found: 'does-not-exist'");
}

#[test]
fn test_selection_is_echoed() {
    let t = Test::with_files(CONFIG, AWS_CONFIG);

    let output = t.run(&[
        "--profile",
        "orphan",
        "--region",
        "ap-south-1",
        "--dotfile",
        ".bash_profile",
    ]);
    assert_failure(&output);
    assert_stdout_contains(&output, "Profile: does-not-exist");
    assert_stdout_contains(&output, "Role: arn:aws:iam::111111111111:role/admin");
    assert_stdout_contains(&output, "Region: ap-south-1");
    assert_stdout_contains(&output, ".bash_profile");
}

#[test]
fn test_profile_env_var_selects_key() {
    let t = Test::with_files(CONFIG, AWS_CONFIG);

    let output = t
        .cmd()
        .env("AWSCONF_PROFILE", "orphan")
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stdout_contains(&output, "Profile: does-not-exist");
}
