//! Command-line surface and the runtime settings derived from it.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::error::CliError;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_DRAIN_MS: u64 = 3000;

#[derive(Parser, Debug)]
#[command(name = "change-detect", about = "Submit before/after image pairs for change detection")]
pub struct Cli {
    #[arg(long, env = "CHANGE_DETECT_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Upload both images and follow the progress log until the run ends.
    Analyze(AnalyzeArgs),
    /// Tail the backend's progress log without submitting anything.
    Logs(StreamArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct StreamArgs {
    #[arg(long, env = "CHANGE_DETECT_STREAM_TIMEOUT_SECS", help = "Give up on the log stream after this many seconds")]
    pub stream_timeout_secs: Option<u64>,
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    #[arg(long)]
    pub before: Option<PathBuf>,

    #[arg(long)]
    pub after: Option<PathBuf>,

    #[arg(long, env = "CHANGE_DETECT_OUT_DIR", help = "Write previews and the GeoJSON download here")]
    pub out_dir: Option<PathBuf>,

    #[arg(
        long,
        env = "CHANGE_DETECT_DRAIN_MS",
        default_value_t = DEFAULT_DRAIN_MS,
        help = "How long to keep reading the log after the response arrives"
    )]
    pub drain_ms: u64,

    #[command(flatten)]
    pub stream: StreamArgs,
}

/// Settings shared by every request a [`crate::net::Backend`] makes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    pub stream_timeout: Option<Duration>,
    pub drain: Duration,
}

impl ClientConfig {
    /// # Errors
    ///
    /// Returns [`CliError::InvalidBaseUrl`] unless `base_url` is an
    /// `http://` or `https://` URL.
    pub fn new(base_url: &str) -> Result<Self, CliError> {
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(CliError::InvalidBaseUrl(base_url.to_owned()));
        }
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            stream_timeout: None,
            drain: Duration::from_millis(DEFAULT_DRAIN_MS),
        })
    }

    #[must_use]
    pub fn with_stream_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.stream_timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_drain(mut self, drain: Duration) -> Self {
        self.drain = drain;
        self
    }

    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl StreamArgs {
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.stream_timeout_secs.map(Duration::from_secs)
    }
}
