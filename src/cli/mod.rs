//! Command-line interface.

pub mod output;
pub mod prompt;

use clap::Parser;
use std::path::PathBuf;

use crate::core::auth::SdkAuthenticator;
use crate::core::bootstrap;
use crate::core::config::{self, Settings};
use crate::core::constants;
use crate::core::profile::ProfileStore;
use crate::core::report::Reporter;
use crate::error::{AssumeRoleError, AuthError, ConfigError, Error, ProfileError, Result};

/// Assume an IAM role and export temporary credentials to your shell dotfile.
///
/// Prior SSO login for the authenticating profile may be required.
#[derive(Parser, Debug)]
#[command(name = "awsconf", version)]
pub struct Cli {
    /// AWS region to export
    #[arg(long, env = "AWSCONF_REGION", default_value = constants::DEFAULT_REGION)]
    pub region: String,

    /// Configuration key under [aws.<key>] in the config file
    #[arg(long, env = "AWSCONF_PROFILE", default_value = constants::DEFAULT_PROFILE)]
    pub profile: String,

    /// Shell environment file relative to HOME, e.g. .zshenv or .bash_profile
    #[arg(long, env = "AWSCONF_DOTFILE", default_value = constants::DEFAULT_DOTFILE)]
    pub dotfile: String,

    /// Config file (default: ~/.awsconf.toml)
    #[arg(long, env = "AWSCONF_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Resolve the configuration and run the credential flow.
pub fn execute(cli: Cli, reporter: &dyn Reporter) -> Result<()> {
    let config_path = match cli.config {
        Some(path) => path,
        None => Settings::default_path()?,
    };
    let settings = Settings::load(&config_path)?;
    let selected = settings.select(&cli.profile, &cli.region, config::dotfile_path(&cli.dotfile)?);

    let profiles = ProfileStore::from_env()?;
    let prompt = prompt::Stdin;
    let authenticator = SdkAuthenticator::new(&selected.region, profiles.profile_files(), &prompt);

    let summary = bootstrap::run(&selected, &profiles, &authenticator, reporter)?;

    reporter.success("done");
    if let Some(expiration) = summary.expiration {
        reporter.info(&format!(
            "credentials expire at {}",
            expiration.format("%Y-%m-%d %H:%M:%S UTC")
        ));
    }
    reporter.success(
        "To get started with using AWS you may need to restart your current shell.\n\
         This would reload your environment to include latest temporary AWS credentials.",
    );
    reporter.success(&format!(
        "To configure your current shell, run:\nsource $HOME/{}",
        cli.dotfile
    ));

    Ok(())
}

/// Report a failed run, with a next step when the user can fix it.
pub fn report_error(e: &Error, reporter: &dyn Reporter) {
    reporter.error(&e.to_string());
    if let Some(hint) = suggestion(e) {
        reporter.hint(&hint);
    }
}

fn suggestion(e: &Error) -> Option<String> {
    match e {
        Error::Config(ConfigError::NotFound(path)) => Some(format!(
            "create {} with an [aws.<key>] table holding role_arn and aws_profile",
            path.display()
        )),
        Error::Profile(ProfileError::NotFound { profile }) if profile.is_empty() => {
            Some("set aws_profile for the selected key in the config file".to_string())
        }
        Error::Profile(ProfileError::NotFound { .. }) => {
            Some("check the profiles in ~/.aws/config".to_string())
        }
        Error::Auth(AuthError::NoCredentials { profile, .. }) => {
            Some(format!("run: aws sso login --profile {}", profile))
        }
        Error::AssumeRole(AssumeRoleError::EmptyRoleArn) => {
            Some("set role_arn for the selected key in the config file".to_string())
        }
        _ => None,
    }
}
