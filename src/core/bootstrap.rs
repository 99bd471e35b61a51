//! The credential bootstrap flow.
//!
//! ```text
//! SelectedConfig ─▶ inspect profile ─▶ authenticate caller
//!                                        │
//!              dotfile ◀─ assume target role
//! ```
//!
//! Every stage needs the previous stage's output; the first error aborts
//! the rest and nothing is written to the dotfile.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::core::assume::assume_target_role;
use crate::core::auth::Authenticator;
use crate::core::config::SelectedConfig;
use crate::core::dotfile::{self, LineKind, Reconciliation};
use crate::core::profile::ProfileStore;
use crate::core::report::Reporter;
use crate::core::session::SessionId;
use crate::error::Result;

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct Summary {
    pub session: SessionId,
    pub expiration: Option<DateTime<Utc>>,
    pub reconciliation: Reconciliation,
}

/// Run the flow for one selected configuration.
pub fn run<A: Authenticator>(
    selected: &SelectedConfig,
    profiles: &ProfileStore,
    authenticator: &A,
    reporter: &dyn Reporter,
) -> Result<Summary> {
    reporter.info(&format!("Profile: {}", selected.auth_profile_name));
    reporter.info(&format!("Role: {}", selected.target_role_arn));
    reporter.info(&format!("Region: {}", selected.region));
    reporter.info(&format!(
        "Shell dotfile: {}",
        selected.dotfile_path.display()
    ));

    let descriptor = profiles.inspect(&selected.auth_profile_name)?;
    let context = authenticator.authenticate(&selected.auth_profile_name, &descriptor)?;
    let assumed = assume_target_role(context, &selected.target_role_arn)?;
    reporter.info(&format!("role assumed, session id: {}", assumed.session));

    reporter.info(&format!(
        "exporting temporary AWS credentials to: {}",
        selected.dotfile_path.display()
    ));
    let reconciliation = dotfile::reconcile(
        &selected.dotfile_path,
        &assumed.credentials,
        &selected.region,
    )?;

    let stale = reconciliation.stale();
    if !stale.is_empty() {
        debug!(stale = stale.len(), "dotfile left partially updated");
        reporter.info(&format!(
            "kept existing {} unchanged; only missing lines were appended",
            names(stale)
        ));
    }

    Ok(Summary {
        session: assumed.session,
        expiration: assumed.credentials.expiration,
        reconciliation,
    })
}

fn names(kinds: &[LineKind]) -> String {
    kinds
        .iter()
        .map(|kind| kind.var())
        .collect::<Vec<_>>()
        .join(", ")
}
