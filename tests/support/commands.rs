//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

/// Environment that would leak the developer's own setup into a test.
const SCRUBBED_ENV: &[&str] = &[
    "AWSCONF_REGION",
    "AWSCONF_PROFILE",
    "AWSCONF_DOTFILE",
    "AWSCONF_CONFIG",
    "AWSCONF_LOG",
    "AWS_PROFILE",
    "AWS_ACCESS_KEY_ID",
    "AWS_SECRET_ACCESS_KEY",
    "AWS_SESSION_TOKEN",
];

impl Test {
    /// Create an awsconf command with correct environment variables.
    ///
    /// Returns a Command configured with:
    /// - HOME set to the temporary home directory
    /// - AWS_CONFIG_FILE / AWS_SHARED_CREDENTIALS_FILE inside it
    /// - NO_COLOR so output can be matched literally
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("awsconf").expect("failed to find awsconf binary");
        for var in SCRUBBED_ENV {
            cmd.env_remove(var);
        }
        cmd.env("HOME", self.home.path());
        // Windows uses USERPROFILE instead of HOME for home directory
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("AWS_CONFIG_FILE", self.aws_config_path());
        cmd.env("AWS_SHARED_CREDENTIALS_FILE", self.aws_credentials_path());
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.home.path());
        cmd
    }

    /// Run awsconf with arguments.
    pub fn run(&self, args: &[&str]) -> Output {
        self.cmd()
            .args(args)
            .output()
            .expect("failed to run awsconf")
    }
}
