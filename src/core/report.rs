//! Progress reporting.
//!
//! The credential flow talks to the user through [`Reporter`] so it can run
//! under a terminal, a test, or anything else.

use std::sync::Mutex;

/// Sink for user-facing messages.
pub trait Reporter {
    fn info(&self, msg: &str);
    fn success(&self, msg: &str);
    fn error(&self, msg: &str);
    /// Next step the user can take after an error.
    fn hint(&self, msg: &str);
}

/// Message severity, as recorded by [`Recorder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Error,
    Hint,
}

/// Reporter that keeps every message in memory.
#[derive(Debug, Default)]
pub struct Recorder {
    messages: Mutex<Vec<(Level, String)>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages recorded so far, oldest first.
    pub fn messages(&self) -> Vec<(Level, String)> {
        self.messages
            .lock()
            .map(|m| m.clone())
            .unwrap_or_default()
    }

    /// Whether any message at `level` contains `needle`.
    pub fn contains(&self, level: Level, needle: &str) -> bool {
        self.messages()
            .iter()
            .any(|(l, m)| *l == level && m.contains(needle))
    }

    fn push(&self, level: Level, msg: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push((level, msg.to_string()));
        }
    }
}

impl Reporter for Recorder {
    fn info(&self, msg: &str) {
        self.push(Level::Info, msg);
    }

    fn success(&self, msg: &str) {
        self.push(Level::Success, msg);
    }

    fn error(&self, msg: &str) {
        self.push(Level::Error, msg);
    }

    fn hint(&self, msg: &str) {
        self.push(Level::Hint, msg);
    }
}
