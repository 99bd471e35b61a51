//! Error types for awsconf.
//!
//! Each stage of the credential flow owns one error enum. They are folded
//! into [`Error`] so callers can propagate with `?` and `main` can pick a
//! hint based on the variant.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    AssumeRole(#[from] AssumeRoleError),

    #[error(transparent)]
    Dotfile(#[from] DotfileError),
}

/// The persisted awsconf configuration could not be read.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("unable to determine home directory")]
    NoHomeDir,
}

/// The named AWS profile could not be loaded.
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("aws profile not found: '{profile}'")]
    NotFound { profile: String },

    #[error("malformed aws config: {0}")]
    Malformed(String),

    #[error("failed to read aws config: {0}")]
    Read(String),

    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// The caller could not be authenticated as the chosen profile.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("no credentials found for profile '{profile}': {reason}")]
    NoCredentials { profile: String, reason: String },

    #[error("assuming profile role {role_arn} was rejected: {reason}")]
    EscalationRejected { role_arn: String, reason: String },

    #[error("failed to read MFA code: {0}")]
    MfaPrompt(String),

    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// The target role could not be assumed.
///
/// Network and authorization failures both surface as `Rejected`.
#[derive(Error, Debug)]
pub enum AssumeRoleError {
    #[error("no target role configured")]
    EmptyRoleArn,

    #[error("error assuming role {role_arn}: {reason}")]
    Rejected { role_arn: String, reason: String },

    #[error("role {role_arn} was assumed but no credentials were returned")]
    NoCredentials { role_arn: String },
}

/// Reading or writing the shell dotfile failed.
#[derive(Error, Debug)]
pub enum DotfileError {
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
