//! Caller authentication.
//!
//! Before the target role can be requested, the chosen profile may need to
//! escalate on its own: a profile with `role_arn` assumes that role first,
//! and one with `mfa_serial` as well asks for a one-time code.
//!
//! ## Strategies
//!
//! | `role_arn` | `mfa_serial` | strategy              |
//! |------------|--------------|-----------------------|
//! | set        | set          | assume role with MFA  |
//! | set        | -            | assume role           |
//! | -          | any          | profile credentials   |

use aws_config::profile::profile_file::ProfileFiles;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_credential_types::provider::{ProvideCredentials, SharedCredentialsProvider};
use aws_sdk_sts::config::Region;
use aws_sdk_sts::error::DisplayErrorContext;
use tokio::runtime::Runtime;
use tracing::{debug, trace};

use crate::core::assume::AssumeRoleApi;
use crate::core::credentials::TemporaryCredentials;
use crate::core::profile::ProfileAuthDescriptor;
use crate::core::session::SessionId;
use crate::error::{AuthError, Result};

/// How the caller obtains the credentials it signs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthStrategy {
    /// Use the profile's own credentials.
    Direct,
    /// Assume the profile's role.
    AssumeRole { role_arn: String },
    /// Assume the profile's role, proving possession of an MFA device.
    AssumeRoleWithMfa { role_arn: String, mfa_serial: String },
}

impl AuthStrategy {
    /// Pick a strategy for a profile.
    pub fn select(descriptor: &ProfileAuthDescriptor) -> Self {
        let non_blank = |v: &Option<String>| {
            v.as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        match (
            non_blank(&descriptor.role_arn),
            non_blank(&descriptor.mfa_serial),
        ) {
            (Some(role_arn), Some(mfa_serial)) => Self::AssumeRoleWithMfa {
                role_arn,
                mfa_serial,
            },
            (Some(role_arn), None) => Self::AssumeRole { role_arn },
            (None, _) => Self::Direct,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::AssumeRole { .. } => "assume-role",
            Self::AssumeRoleWithMfa { .. } => "assume-role-mfa",
        }
    }
}

/// Source of MFA one-time codes.
pub trait TokenPrompt {
    /// Block until a code for `mfa_serial` is available.
    fn token_code(&self, mfa_serial: &str) -> Result<String>;
}

/// Authenticated handle able to sign the target role request.
///
/// Owns the runtime its SDK connections were opened on, so it has to be
/// used and dropped as a unit.
pub struct AuthenticatedContext {
    pub(crate) runtime: Runtime,
    pub(crate) config: SdkConfig,
    strategy: AuthStrategy,
}

impl AuthenticatedContext {
    /// Strategy that produced this context.
    pub fn strategy(&self) -> &AuthStrategy {
        &self.strategy
    }
}

/// Produces an authenticated context for a profile.
pub trait Authenticator {
    type Context: AssumeRoleApi;

    fn authenticate(
        &self,
        profile_name: &str,
        descriptor: &ProfileAuthDescriptor,
    ) -> Result<Self::Context>;
}

/// [`Authenticator`] backed by the AWS SDK.
pub struct SdkAuthenticator<'a> {
    region: &'a str,
    profile_files: Option<ProfileFiles>,
    prompt: &'a dyn TokenPrompt,
}

impl<'a> SdkAuthenticator<'a> {
    /// `region` is used for STS when the profile doesn't configure one.
    /// Without `profile_files` the SDK's default file locations apply.
    pub fn new(
        region: &'a str,
        profile_files: Option<ProfileFiles>,
        prompt: &'a dyn TokenPrompt,
    ) -> Self {
        Self {
            region,
            profile_files,
            prompt,
        }
    }
}

impl Authenticator for SdkAuthenticator<'_> {
    type Context = AuthenticatedContext;

    fn authenticate(
        &self,
        profile_name: &str,
        descriptor: &ProfileAuthDescriptor,
    ) -> Result<AuthenticatedContext> {
        authenticate_caller(
            profile_name,
            descriptor,
            self.region,
            self.profile_files.as_ref(),
            self.prompt,
        )
    }
}

/// Build an authenticated context for `profile_name`.
///
/// Credentials are resolved eagerly, so a missing SSO login or a rejected
/// escalation fails here rather than on the target role request.
///
/// # Errors
///
/// Returns `AuthError::NoCredentials` if no credentials can be found,
/// `AuthError::MfaPrompt` if no code could be read, or
/// `AuthError::EscalationRejected` if STS refuses the profile's role.
pub fn authenticate_caller(
    profile_name: &str,
    descriptor: &ProfileAuthDescriptor,
    fallback_region: &str,
    profile_files: Option<&ProfileFiles>,
    prompt: &dyn TokenPrompt,
) -> Result<AuthenticatedContext> {
    let strategy = AuthStrategy::select(descriptor);
    debug!(
        profile = profile_name,
        strategy = strategy.name(),
        "authenticating caller"
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(AuthError::Runtime)?;

    let source = base_profile(&strategy, profile_name, descriptor);
    let base = runtime.block_on(async {
        let config = load_config(source, fallback_region, profile_files).await;
        verify(&config, source.unwrap_or(profile_name)).await?;
        Ok::<_, crate::error::Error>(config)
    })?;

    // The code is read before STS is contacted.
    let code = mfa_code(&strategy, prompt)?;
    let config = match &strategy {
        AuthStrategy::Direct => base,
        AuthStrategy::AssumeRole { role_arn } => {
            runtime.block_on(escalate(&base, role_arn, None))?
        }
        AuthStrategy::AssumeRoleWithMfa {
            role_arn,
            mfa_serial,
        } => {
            let mfa = code.as_deref().map(|code| Mfa {
                serial: mfa_serial,
                code,
            });
            runtime.block_on(escalate(&base, role_arn, mfa))?
        }
    };

    debug!(strategy = strategy.name(), "caller authenticated");
    Ok(AuthenticatedContext {
        runtime,
        config,
        strategy,
    })
}

/// Profile the base credentials come from.
///
/// A profile that assumes its own role gets them from its `source_profile`,
/// or from the default chain (`None`) when there is none.
fn base_profile<'a>(
    strategy: &AuthStrategy,
    profile_name: &'a str,
    descriptor: &'a ProfileAuthDescriptor,
) -> Option<&'a str> {
    match strategy {
        AuthStrategy::Direct => Some(profile_name),
        _ => descriptor.source_profile.as_deref(),
    }
}

fn mfa_code(strategy: &AuthStrategy, prompt: &dyn TokenPrompt) -> Result<Option<String>> {
    match strategy {
        AuthStrategy::AssumeRoleWithMfa { mfa_serial, .. } => {
            prompt.token_code(mfa_serial).map(Some)
        }
        _ => Ok(None),
    }
}

struct Mfa<'a> {
    serial: &'a str,
    code: &'a str,
}

async fn load_config(
    profile: Option<&str>,
    fallback_region: &str,
    profile_files: Option<&ProfileFiles>,
) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(files) = profile_files {
        loader = loader.profile_files(files.clone());
    }
    if let Some(name) = profile {
        loader = loader.profile_name(name);
    }
    let config = loader.load().await;

    if config.region().is_some() {
        return config;
    }
    trace!(region = fallback_region, "no region configured, using fallback");
    config
        .into_builder()
        .region(Region::new(fallback_region.to_string()))
        .build()
}

async fn verify(config: &SdkConfig, profile: &str) -> Result<()> {
    let no_credentials = |reason: String| AuthError::NoCredentials {
        profile: profile.to_string(),
        reason,
    };

    let provider = config
        .credentials_provider()
        .ok_or_else(|| no_credentials("no credential provider available".to_string()))?;
    provider
        .provide_credentials()
        .await
        .map_err(|e| no_credentials(DisplayErrorContext(&e).to_string()))?;

    trace!(profile, "base credentials resolved");
    Ok(())
}

async fn escalate(base: &SdkConfig, role_arn: &str, mfa: Option<Mfa<'_>>) -> Result<SdkConfig> {
    let session = SessionId::generate();
    debug!(
        role = role_arn,
        session = %session,
        mfa = mfa.is_some(),
        "assuming profile role"
    );

    let client = aws_sdk_sts::Client::new(base);
    let mut request = client
        .assume_role()
        .role_arn(role_arn)
        .role_session_name(session.as_str());
    if let Some(mfa) = mfa {
        request = request.serial_number(mfa.serial).token_code(mfa.code);
    }

    let rejected = |reason: String| AuthError::EscalationRejected {
        role_arn: role_arn.to_string(),
        reason,
    };
    let output = request
        .send()
        .await
        .map_err(|e| rejected(DisplayErrorContext(&e).to_string()))?;
    let credentials = output
        .credentials()
        .map(TemporaryCredentials::from)
        .ok_or_else(|| rejected("no credentials returned".to_string()))?;

    trace!(
        access_key_id = %credentials.masked_access_key_id(),
        "profile role assumed"
    );
    Ok(base
        .clone()
        .into_builder()
        .credentials_provider(SharedCredentialsProvider::new(credentials.to_sdk()))
        .build())
}
