//! Target role assumption.
//!
//! Exchanges an authenticated context for temporary credentials of the
//! target role. Any failure is reported once and never retried.

use aws_sdk_sts::error::DisplayErrorContext;
use tracing::debug;

use crate::core::auth::AuthenticatedContext;
use crate::core::credentials::TemporaryCredentials;
use crate::core::session::SessionId;
use crate::error::{AssumeRoleError, Result};

/// One `AssumeRole` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssumeRoleRequest {
    pub role_arn: String,
    pub session_name: SessionId,
}

/// Remote role assumption.
///
/// Implemented by [`AuthenticatedContext`] against STS and by mocks in
/// tests.
pub trait AssumeRoleApi {
    fn assume_role(&self, request: &AssumeRoleRequest) -> Result<TemporaryCredentials>;
}

/// Result of a successful target role assumption.
#[derive(Debug, Clone)]
pub struct Assumed {
    pub session: SessionId,
    pub credentials: TemporaryCredentials,
}

/// Assume `role_arn` with a freshly generated session name.
///
/// Takes the context by value: it is spent after one request.
///
/// # Errors
///
/// Returns `AssumeRoleError::EmptyRoleArn` without calling out if no role is
/// configured, otherwise whatever the remote call reports.
pub fn assume_target_role<C: AssumeRoleApi>(context: C, role_arn: &str) -> Result<Assumed> {
    let role_arn = role_arn.trim();
    if role_arn.is_empty() {
        return Err(AssumeRoleError::EmptyRoleArn.into());
    }

    let request = AssumeRoleRequest {
        role_arn: role_arn.to_string(),
        session_name: SessionId::generate(),
    };
    debug!(role = role_arn, session = %request.session_name, "assuming target role");

    let credentials = context.assume_role(&request)?;
    debug!(
        access_key_id = %credentials.masked_access_key_id(),
        expiration = ?credentials.expiration,
        "target role assumed"
    );

    Ok(Assumed {
        session: request.session_name,
        credentials,
    })
}

impl AssumeRoleApi for AuthenticatedContext {
    fn assume_role(&self, request: &AssumeRoleRequest) -> Result<TemporaryCredentials> {
        let client = aws_sdk_sts::Client::new(&self.config);
        let rejected = |reason: String| AssumeRoleError::Rejected {
            role_arn: request.role_arn.clone(),
            reason,
        };

        let output = self
            .runtime
            .block_on(
                client
                    .assume_role()
                    .role_arn(&request.role_arn)
                    .role_session_name(request.session_name.as_str())
                    .send(),
            )
            .map_err(|e| rejected(DisplayErrorContext(&e).to_string()))?;

        let credentials = output
            .credentials()
            .ok_or_else(|| AssumeRoleError::NoCredentials {
                role_arn: request.role_arn.clone(),
            })?;
        Ok(TemporaryCredentials::from(credentials))
    }
}
