//! MFA code prompt.

use dialoguer::Input;
use std::io::{self, BufRead, IsTerminal};
use tracing::debug;

use crate::core::auth::TokenPrompt;
use crate::error::{AuthError, Result};

/// Reads MFA codes from standard input.
///
/// Prompts interactively on a terminal, otherwise reads one line. There is
/// no timeout in either case.
#[derive(Debug, Default, Clone, Copy)]
pub struct Stdin;

impl TokenPrompt for Stdin {
    fn token_code(&self, mfa_serial: &str) -> Result<String> {
        debug!(mfa_serial, "waiting for MFA code");

        if io::stdin().is_terminal() {
            let code = Input::<String>::new()
                .with_prompt(format!("Assume Role MFA token code ({})", mfa_serial))
                .interact_text()
                .map_err(|e| AuthError::MfaPrompt(e.to_string()))?;
            non_empty(&code)
        } else {
            read_code(&mut io::stdin().lock())
        }
    }
}

/// Read a code from the first line of `reader`.
fn read_code(reader: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .map_err(|e| AuthError::MfaPrompt(e.to_string()))?;
    non_empty(&line)
}

fn non_empty(code: &str) -> Result<String> {
    let code = code.trim();
    if code.is_empty() {
        return Err(AuthError::MfaPrompt("no code entered".to_string()).into());
    }
    Ok(code.to_string())
}
