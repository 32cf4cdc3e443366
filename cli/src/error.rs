use std::path::PathBuf;

use session::AnalysisError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("failed to read {}: {source}", path.display())]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("failed to write {}: {source}", path.display())]
    WriteFile { path: PathBuf, source: std::io::Error },
    #[error("invalid backend payload: {0}")]
    Protocol(#[from] protocol::ProtocolError),
    #[error("{0}")]
    Analysis(#[from] AnalysisError),
}
