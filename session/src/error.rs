//! Failure taxonomy for one analysis run.

/// Line logged when analyze is pressed without both files.
pub const VALIDATION_MESSAGE: &str = "Upload both images";
/// Line logged when the submission itself fails; details stay in diagnostics.
pub const TRANSPORT_MESSAGE: &str = "Processing failed";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    /// A required file is missing; nothing was sent.
    #[error("{}", VALIDATION_MESSAGE)]
    Validation,
    /// The backend answered with an explicit error message.
    #[error("{0}")]
    Backend(String),
    /// The request failed or the response could not be parsed.
    #[error("request failed: {0}")]
    Transport(String),
    /// The push-log connection failed. Never surfaced in the log panel.
    #[error("log stream failed: {0}")]
    Stream(String),
}

impl AnalysisError {
    /// Text shown in the log panel for this failure, if any.
    #[must_use]
    pub fn user_message(&self) -> Option<&str> {
        match self {
            Self::Validation => Some(VALIDATION_MESSAGE),
            Self::Backend(message) => Some(message),
            Self::Transport(_) => Some(TRANSPORT_MESSAGE),
            Self::Stream(_) => None,
        }
    }
}
