//! Shell dotfile reconciliation.
//!
//! Merges four `export` lines (access key id, secret access key, session
//! token, region) into a shell startup file without touching anything
//! else in it.
//!
//! ## Merge rule
//!
//! A line *containing* one of the recognized prefixes is matched. Then:
//!
//! - **All four kinds matched**: the file is rewritten with each matched
//!   line replaced in place. Every other line is kept verbatim.
//! - **Otherwise**: nothing already in the file changes. Lines for the
//!   unmatched kinds are appended; matched lines keep their old values.
//!
//! The second case can leave a stale line (say an old `AWS_REGION`) next
//! to freshly appended ones. [`Reconciliation::stale`] names those kinds so
//! callers can tell the user.

use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, trace};

use crate::core::constants;
use crate::core::credentials::TemporaryCredentials;
use crate::error::{DotfileError, Result};

/// A recognized export line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    AccessKey,
    SecretKey,
    SessionToken,
    Region,
}

impl LineKind {
    /// All kinds, in match and append order.
    pub const ALL: [LineKind; 4] = [
        LineKind::AccessKey,
        LineKind::SecretKey,
        LineKind::SessionToken,
        LineKind::Region,
    ];

    /// Text that identifies a line of this kind.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::AccessKey => constants::ACCESS_KEY_LINE,
            Self::SecretKey => constants::SECRET_KEY_LINE,
            Self::SessionToken => constants::SESSION_TOKEN_LINE,
            Self::Region => constants::REGION_LINE,
        }
    }

    /// Exported variable name.
    pub fn var(self) -> &'static str {
        match self {
            Self::AccessKey => "AWS_ACCESS_KEY_ID",
            Self::SecretKey => "AWS_SECRET_ACCESS_KEY",
            Self::SessionToken => "AWS_SESSION_TOKEN",
            Self::Region => "AWS_REGION",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::AccessKey => 0,
            Self::SecretKey => 1,
            Self::SessionToken => 2,
            Self::Region => 3,
        }
    }

    fn classify(line: &[u8]) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| {
            let prefix = kind.prefix().as_bytes();
            line.windows(prefix.len()).any(|w| w == prefix)
        })
    }
}

/// What reconciliation did to the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    /// Kinds already present in the file.
    pub found: Vec<LineKind>,
    /// Kinds appended to the end of the file.
    pub appended: Vec<LineKind>,
    /// Whether the file was rewritten with updated values in place.
    pub rewritten: bool,
}

impl Reconciliation {
    /// Kinds left in the file with their previous values.
    pub fn stale(&self) -> &[LineKind] {
        if self.rewritten {
            &[]
        } else {
            self.found.as_slice()
        }
    }
}

/// How the file must change.
///
/// Bytes rather than text: dotfiles are not guaranteed to be UTF-8 and
/// lines that aren't ours are carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// Replace the whole file with this content.
    Rewrite(Vec<u8>),
    /// Append this text to the end of the file.
    Append(Vec<u8>),
}

/// Pure merge step: decide the edit for `content`.
pub fn plan(
    content: &[u8],
    credentials: &TemporaryCredentials,
    region: &str,
) -> (Edit, Reconciliation) {
    let replacements = candidates(credentials, region);
    let mut found = [false; 4];

    let lines: Vec<&[u8]> = content
        .split(|&b| b == b'\n')
        .map(|line| match LineKind::classify(line) {
            Some(kind) => {
                found[kind.index()] = true;
                replacements[kind.index()].as_bytes()
            }
            None => line,
        })
        .collect();

    let present: Vec<LineKind> = LineKind::ALL
        .into_iter()
        .filter(|kind| found[kind.index()])
        .collect();

    if present.len() == LineKind::ALL.len() {
        let reconciliation = Reconciliation {
            found: present,
            appended: Vec::new(),
            rewritten: true,
        };
        return (Edit::Rewrite(lines.join(&b'\n')), reconciliation);
    }

    let missing: Vec<LineKind> = LineKind::ALL
        .into_iter()
        .filter(|kind| !found[kind.index()])
        .collect();

    let mut appended = Vec::new();
    // Keep the last existing line intact when the file lacks a final newline.
    if content.last().is_some_and(|&b| b != b'\n') {
        appended.push(b'\n');
    }
    for kind in &missing {
        appended.extend_from_slice(replacements[kind.index()].as_bytes());
        appended.push(b'\n');
    }

    let reconciliation = Reconciliation {
        found: present,
        appended: missing,
        rewritten: false,
    };
    (Edit::Append(appended), reconciliation)
}

/// Merge credentials and region into the dotfile at `path`.
///
/// The file is created if missing. It is held open for the whole
/// read-modify-write and closed on every path out of this function.
///
/// # Errors
///
/// Returns `DotfileError` if the file cannot be opened, read, or written.
pub fn reconcile(
    path: &Path,
    credentials: &TemporaryCredentials,
    region: &str,
) -> Result<Reconciliation> {
    debug!(path = %path.display(), "reconciling dotfile");

    let mut file = open(path)?;
    let mut content = Vec::new();
    file.read_to_end(&mut content)
        .map_err(|source| DotfileError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let (edit, reconciliation) = plan(&content, credentials, region);
    let write_err = |source: std::io::Error| DotfileError::Write {
        path: path.to_path_buf(),
        source,
    };

    match edit {
        Edit::Rewrite(text) => {
            trace!(bytes = text.len(), "rewriting dotfile");
            // Opened in append mode, so writes land at the new end: offset 0.
            file.set_len(0).map_err(write_err)?;
            file.write_all(&text).map_err(write_err)?;
        }
        Edit::Append(text) => {
            trace!(bytes = text.len(), "appending to dotfile");
            file.write_all(&text).map_err(write_err)?;
        }
    }
    file.flush().map_err(write_err)?;

    debug!(
        found = reconciliation.found.len(),
        appended = reconciliation.appended.len(),
        rewritten = reconciliation.rewritten,
        "dotfile reconciled"
    );
    Ok(reconciliation)
}

fn open(path: &Path) -> Result<File> {
    let mut options = OpenOptions::new();
    options.read(true).append(true).create(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    options.open(path).map_err(|source| {
        DotfileError::Open {
            path: path.to_path_buf(),
            source,
        }
        .into()
    })
}

fn candidates(credentials: &TemporaryCredentials, region: &str) -> [String; 4] {
    [
        format!("{}{}", constants::ACCESS_KEY_LINE, credentials.access_key_id),
        format!(
            "{}{}",
            constants::SECRET_KEY_LINE,
            credentials.secret_access_key.as_str()
        ),
        format!(
            "{}{}",
            constants::SESSION_TOKEN_LINE,
            credentials.session_token.as_str()
        ),
        format!("{}{}", constants::REGION_LINE, region),
    ]
}
