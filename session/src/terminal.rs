//! Log panel model.
//!
//! DESIGN
//! ======
//! Views never scroll on their own; every append bumps `scroll_seq`, and a
//! view effect that tracks it pins the panel to its last line.

#[cfg(test)]
#[path = "terminal_test.rs"]
mod terminal_test;

use serde::{Deserialize, Serialize};

use crate::severity::Severity;

/// One line in the log panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogLine {
    pub text: String,
    pub severity: Severity,
}

/// Ordered, append-only list of log lines plus a scroll request counter.
#[derive(Clone, Debug, Default)]
pub struct Terminal {
    lines: Vec<LogLine>,
    scroll_seq: u64,
}

impl Terminal {
    /// Append `message`, classified by keyword.
    pub fn log(&mut self, message: &str) -> &LogLine {
        self.push(message, Severity::classify(message))
    }

    /// Append `message` as an error regardless of its keywords.
    pub fn log_error(&mut self, message: &str) -> &LogLine {
        self.push(message, Severity::Error)
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.scroll_seq = self.scroll_seq.wrapping_add(1);
    }

    #[must_use]
    pub fn lines(&self) -> &[LogLine] {
        &self.lines
    }

    #[must_use]
    pub fn last(&self) -> Option<&LogLine> {
        self.lines.last()
    }

    /// Line texts in order; handy for assertions and plain-text rendering.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|line| line.text.as_str()).collect()
    }

    #[must_use]
    pub fn scroll_seq(&self) -> u64 {
        self.scroll_seq
    }

    pub(crate) fn last_mut(&mut self) -> Option<&mut LogLine> {
        self.lines.last_mut()
    }

    fn push(&mut self, message: &str, severity: Severity) -> &LogLine {
        self.lines.push(LogLine {
            text: message.to_owned(),
            severity,
        });
        self.scroll_seq = self.scroll_seq.wrapping_add(1);
        &self.lines[self.lines.len() - 1]
    }
}
