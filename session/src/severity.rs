//! Keyword tables that decide how a log line is colored.

#[cfg(test)]
#[path = "severity_test.rs"]
mod severity_test;

use serde::{Deserialize, Serialize};

/// Keywords marking a line as a success. Checked before [`ERROR_KEYWORDS`].
pub const SUCCESS_KEYWORDS: &[&str] = &["complete", "completed", "pixels"];
/// Keywords marking a line as an error.
pub const ERROR_KEYWORDS: &[&str] = &["error", "failed", "exception"];

/// Visual classification of a log line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    /// Classify a message by case-insensitive substring match. First table
    /// with a hit wins.
    #[must_use]
    pub fn classify(message: &str) -> Self {
        let lower = message.to_lowercase();
        if contains_any(&lower, SUCCESS_KEYWORDS) {
            Self::Success
        } else if contains_any(&lower, ERROR_KEYWORDS) {
            Self::Error
        } else {
            Self::Info
        }
    }

    /// Modifier class used by the log panel stylesheet.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}
