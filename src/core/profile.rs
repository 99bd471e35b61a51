//! AWS shared profile inspection.
//!
//! Reads `~/.aws/config` and `~/.aws/credentials` to find out whether a
//! profile has to assume a role of its own (and with which MFA device)
//! before it can be used. Parsing is left to `aws-config`, so this sees
//! the files exactly as the credential chain in [`crate::core::auth`] does.

use aws_config::profile::profile_file::{ProfileFileKind, ProfileFiles};
use aws_config::profile::{Profile, ProfileFileLoadError};
use aws_sdk_sts::error::DisplayErrorContext;
use aws_types::os_shim_internal::{Env, Fs};
use std::borrow::Cow;
use std::path::PathBuf;
use tracing::{debug, trace};

use crate::core::constants;
use crate::error::{ConfigError, ProfileError, Result};

/// A profile's own authentication requirements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileAuthDescriptor {
    /// `role_arn` the profile itself assumes
    pub role_arn: Option<String>,
    /// `mfa_serial` required to assume `role_arn`
    pub mfa_serial: Option<String>,
    /// `source_profile` providing the base credentials for `role_arn`
    pub source_profile: Option<String>,
}

impl ProfileAuthDescriptor {
    fn from_profile(profile: &Profile) -> Self {
        let get = |key: &str| {
            profile
                .get(key)
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        Self {
            role_arn: get("role_arn"),
            mfa_serial: get("mfa_serial"),
            source_profile: get("source_profile"),
        }
    }
}

/// The pair of shared files profiles are read from.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    config_file: PathBuf,
    credentials_file: PathBuf,
}

impl ProfileStore {
    pub fn new(config_file: impl Into<PathBuf>, credentials_file: impl Into<PathBuf>) -> Self {
        Self {
            config_file: config_file.into(),
            credentials_file: credentials_file.into(),
        }
    }

    /// Locate the shared files the way the AWS CLI does.
    ///
    /// `AWS_CONFIG_FILE` and `AWS_SHARED_CREDENTIALS_FILE` win over the
    /// defaults under HOME.
    pub fn from_env() -> Result<Self> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        let locate = |var: &str, default: &str| {
            std::env::var_os(var)
                .map(PathBuf::from)
                .unwrap_or_else(|| home.join(default))
        };

        Ok(Self::new(
            locate("AWS_CONFIG_FILE", constants::AWS_CONFIG_FILE),
            locate("AWS_SHARED_CREDENTIALS_FILE", constants::AWS_CREDENTIALS_FILE),
        ))
    }

    /// The existing shared files, config first so credentials win on
    /// keys present in both. `None` when neither file exists.
    pub fn profile_files(&self) -> Option<ProfileFiles> {
        let files = [
            (ProfileFileKind::Config, &self.config_file),
            (ProfileFileKind::Credentials, &self.credentials_file),
        ];

        let mut builder = ProfileFiles::builder();
        let mut any = false;
        for (kind, path) in files {
            if path.exists() {
                builder = builder.with_file(kind, path);
                any = true;
            } else {
                trace!(path = %path.display(), "shared file absent");
            }
        }
        any.then(|| builder.build())
    }

    /// Read the authentication descriptor of a named profile.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::NotFound` if neither file has a section for
    /// the profile, or `ProfileError::Malformed` if a file can't be parsed.
    pub fn inspect(&self, name: &str) -> Result<ProfileAuthDescriptor> {
        debug!(profile = name, "inspecting aws profile");

        let not_found = || ProfileError::NotFound {
            profile: name.to_string(),
        };
        if name.trim().is_empty() {
            return Err(not_found().into());
        }
        let Some(files) = self.profile_files() else {
            return Err(not_found().into());
        };

        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .map_err(ProfileError::Runtime)?;
        let profiles = runtime
            .block_on(aws_config::profile::load(
                &Fs::real(),
                &Env::real(),
                &files,
                Some(Cow::Owned(name.to_string())),
            ))
            .map_err(load_error)?;

        let profile = profiles.get_profile(name).ok_or_else(not_found)?;
        let descriptor = ProfileAuthDescriptor::from_profile(profile);
        debug!(
            profile = name,
            role = descriptor.role_arn.is_some(),
            mfa = descriptor.mfa_serial.is_some(),
            "profile inspected"
        );
        Ok(descriptor)
    }
}

fn load_error(e: ProfileFileLoadError) -> ProfileError {
    let reason = DisplayErrorContext(&e).to_string();
    if matches!(e, ProfileFileLoadError::ParseError { .. }) {
        ProfileError::Malformed(reason)
    } else {
        ProfileError::Read(reason)
    }
}
