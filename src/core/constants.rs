//! Constants used throughout awsconf.
//!
//! Centralizes defaults and the recognized dotfile line prefixes.

/// Configuration file name relative to HOME (~/.awsconf.toml).
pub const CONFIG_FILE: &str = ".awsconf.toml";

/// Default shell dotfile relative to HOME.
pub const DEFAULT_DOTFILE: &str = ".zshenv";

/// Default region written to the dotfile.
pub const DEFAULT_REGION: &str = "eu-central-1";

/// Default configuration key.
pub const DEFAULT_PROFILE: &str = "default";

/// Prefix of the access key id export line.
pub const ACCESS_KEY_LINE: &str = "export AWS_ACCESS_KEY_ID=";

/// Prefix of the secret access key export line.
pub const SECRET_KEY_LINE: &str = "export AWS_SECRET_ACCESS_KEY=";

/// Prefix of the session token export line.
pub const SESSION_TOKEN_LINE: &str = "export AWS_SESSION_TOKEN=";

/// Prefix of the region export line.
pub const REGION_LINE: &str = "export AWS_REGION=";

/// Shared AWS config file relative to HOME, overridden by `AWS_CONFIG_FILE`.
pub const AWS_CONFIG_FILE: &str = ".aws/config";

/// Shared AWS credentials file relative to HOME, overridden by
/// `AWS_SHARED_CREDENTIALS_FILE`.
pub const AWS_CREDENTIALS_FILE: &str = ".aws/credentials";

/// Source name attached to credentials obtained by escalating a profile.
pub const PROVIDER_NAME: &str = "awsconf";
