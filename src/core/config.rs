//! Configuration file management.
//!
//! Handles reading `~/.awsconf.toml` and resolving a configuration key into
//! the [`SelectedConfig`] that drives one invocation.
//!
//! ```toml
//! [aws.default]
//! role_arn = "arn:aws:iam::123456789012:role/admin"
//! aws_profile = "sso-dev"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Persisted configuration stored in `~/.awsconf.toml`
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Map of configuration keys to role/profile pairs
    #[serde(default)]
    pub aws: BTreeMap<String, Entry>,
}

/// One `[aws.<key>]` table.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Entry {
    /// Role to assume and export credentials for
    #[serde(default, alias = "roleArn")]
    pub role_arn: String,
    /// AWS profile used to authenticate before assuming the role
    #[serde(default, alias = "awsProfile")]
    pub aws_profile: String,
}

/// Everything one run needs, resolved up front and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedConfig {
    pub config_key: String,
    pub target_role_arn: String,
    pub auth_profile_name: String,
    pub region: String,
    pub dotfile_path: PathBuf,
}

impl Settings {
    /// Path to `~/.awsconf.toml`
    pub fn default_path() -> Result<PathBuf> {
        Ok(home_dir()?.join(constants::CONFIG_FILE))
    }

    /// Load settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file doesn't exist,
    /// or `ConfigError::Parse` if the TOML is malformed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading config");

        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()).into());
        }
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let settings: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;

        debug!(keys = settings.aws.len(), "config loaded");
        Ok(settings)
    }

    /// Resolve a configuration key.
    ///
    /// An unknown key is not an error here: it resolves to empty role and
    /// profile names and the later stages reject them.
    pub fn select(&self, key: &str, region: &str, dotfile_path: PathBuf) -> SelectedConfig {
        let entry = self.aws.get(key).cloned().unwrap_or_else(|| {
            debug!(key, "config key not present");
            Entry::default()
        });

        SelectedConfig {
            config_key: key.to_string(),
            target_role_arn: entry.role_arn.trim().to_string(),
            auth_profile_name: entry.aws_profile.trim().to_string(),
            region: region.to_string(),
            dotfile_path,
        }
    }
}

/// Resolve a dotfile name against the home directory.
pub fn dotfile_path(name: &str) -> Result<PathBuf> {
    Ok(home_dir()?.join(name))
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| ConfigError::NoHomeDir.into())
}
