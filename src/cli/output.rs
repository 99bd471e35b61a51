//! Terminal output.
//!
//! Color scheme (respects NO_COLOR):
//! - Cyan: progress and information
//! - Green: success
//! - Red: errors, on stderr

use console::style;

use crate::core::report::Reporter;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// [`Reporter`] that prints to the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct Terminal;

impl Reporter for Terminal {
    fn info(&self, msg: &str) {
        info(msg);
    }

    fn success(&self, msg: &str) {
        success(msg);
    }

    fn error(&self, msg: &str) {
        error(msg);
    }

    fn hint(&self, msg: &str) {
        hint(msg);
    }
}

/// Print an informational message (cyan).
///
/// Example: `Profile: sso-dev`
pub fn info(msg: &str) {
    if colors_enabled() {
        println!("{}", style(msg).cyan());
    } else {
        println!("{}", msg);
    }
}

/// Print a success message (bold green).
///
/// Example: `✓ done`
pub fn success(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("✓").green().bold(), style(msg).green().bold());
    } else {
        println!("✓ {}", msg);
    }
}

/// Print an error message to stderr (bold red).
///
/// Example: `✗ aws profile not found: 'dev'`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red().bold(), style(msg).red().bold());
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a hint message to stderr (cyan).
///
/// Example: `→ run: aws sso login --profile dev`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}
