//! Test support utilities for awsconf integration tests.
//!
//! Provides an isolated HOME with helpers to seed the awsconf config and
//! the shared AWS files.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with an isolated temporary home directory.
///
/// No process-global state is mutated; child processes get HOME and the
/// AWS file locations through their environment so tests run in parallel.
pub struct Test {
    /// Temporary home directory
    pub home: TempDir,
}

impl Test {
    /// Create an empty environment: no config, no AWS files.
    pub fn new() -> Self {
        let home = TempDir::new().expect("failed to create temp home");
        Self { home }
    }

    /// Create an environment with the given awsconf config and AWS config.
    pub fn with_files(config: &str, aws_config: &str) -> Self {
        let t = Self::new();
        t.write_config(config);
        t.write_aws_config(aws_config);
        t
    }

    /// Path of `~/.awsconf.toml`.
    pub fn config_path(&self) -> PathBuf {
        self.home.path().join(".awsconf.toml")
    }

    /// Path of the shared AWS config file.
    pub fn aws_config_path(&self) -> PathBuf {
        self.home.path().join(".aws").join("config")
    }

    /// Path of the shared AWS credentials file.
    pub fn aws_credentials_path(&self) -> PathBuf {
        self.home.path().join(".aws").join("credentials")
    }

    /// Path of a dotfile under the temporary home.
    pub fn dotfile(&self, name: &str) -> PathBuf {
        self.home.path().join(name)
    }

    pub fn write_config(&self, contents: &str) {
        std::fs::write(self.config_path(), contents).expect("failed to write config");
    }

    pub fn write_aws_config(&self, contents: &str) {
        let path = self.aws_config_path();
        std::fs::create_dir_all(path.parent().unwrap()).expect("failed to create ~/.aws");
        std::fs::write(path, contents).expect("failed to write aws config");
    }
}
