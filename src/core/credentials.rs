//! Temporary credentials returned by STS.

use chrono::{DateTime, Utc};
use std::fmt;
use std::time::SystemTime;
use zeroize::Zeroizing;

use crate::core::constants;

/// Access key / secret / session token triple with an expiration.
///
/// The secret and token are wiped from memory on drop and never shown by
/// `Debug`.
#[derive(Clone)]
pub struct TemporaryCredentials {
    pub access_key_id: String,
    pub secret_access_key: Zeroizing<String>,
    pub session_token: Zeroizing<String>,
    pub expiration: Option<DateTime<Utc>>,
}

impl TemporaryCredentials {
    pub fn new(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        session_token: impl Into<String>,
        expiration: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: Zeroizing::new(secret_access_key.into()),
            session_token: Zeroizing::new(session_token.into()),
            expiration,
        }
    }

    /// Access key id with everything but the last four characters masked.
    pub fn masked_access_key_id(&self) -> String {
        let visible = self
            .access_key_id
            .char_indices()
            .rev()
            .nth(3)
            .map(|(i, _)| &self.access_key_id[i..])
            .unwrap_or("");
        format!("****{}", visible)
    }

    /// Credentials in the form the SDK signs requests with.
    pub fn to_sdk(&self) -> aws_credential_types::Credentials {
        aws_credential_types::Credentials::new(
            self.access_key_id.clone(),
            self.secret_access_key.as_str(),
            Some(self.session_token.as_str().to_owned()),
            self.expiration.map(SystemTime::from),
            constants::PROVIDER_NAME,
        )
    }
}

impl From<&aws_sdk_sts::types::Credentials> for TemporaryCredentials {
    fn from(credentials: &aws_sdk_sts::types::Credentials) -> Self {
        let expiration = credentials.expiration();
        Self::new(
            credentials.access_key_id(),
            credentials.secret_access_key(),
            credentials.session_token(),
            DateTime::from_timestamp(expiration.secs(), expiration.subsec_nanos()),
        )
    }
}

impl fmt::Debug for TemporaryCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemporaryCredentials")
            .field("access_key_id", &self.masked_access_key_id())
            .field("secret_access_key", &"<redacted>")
            .field("session_token", &"<redacted>")
            .field("expiration", &self.expiration)
            .finish()
    }
}
