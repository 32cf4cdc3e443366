//! HTTP transport: the multipart submission and the `/logs` event stream.

use std::collections::VecDeque;
use std::path::PathBuf;

use protocol::sse::SseDecoder;
use protocol::{AFTER_FIELD, BEFORE_FIELD, DETECT_CHANGE_PATH, DetectResponse, LOGS_PATH};
use reqwest::header::ACCEPT;
use reqwest::multipart::{Form, Part};
use session::SelectedFile;

use crate::config::ClientConfig;
use crate::error::CliError;

#[derive(Clone, Debug)]
pub struct Backend {
    http: reqwest::Client,
    config: ClientConfig,
}

impl Backend {
    /// # Errors
    ///
    /// Returns [`CliError::Http`] if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, CliError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self { http, config })
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// POST both images and parse the JSON body, whatever the status code.
    ///
    /// # Errors
    ///
    /// Fails if a file cannot be read, the request cannot be sent, or the body
    /// is not a JSON response document.
    pub async fn submit(
        &self,
        before: &SelectedFile<PathBuf>,
        after: &SelectedFile<PathBuf>,
    ) -> Result<DetectResponse, CliError> {
        let form = Form::new()
            .part(BEFORE_FIELD, file_part(before).await?)
            .part(AFTER_FIELD, file_part(after).await?);

        let response = self
            .http
            .post(self.config.endpoint(DETECT_CHANGE_PATH))
            .multipart(form)
            .send()
            .await?;
        let status = response.status();
        let body = response.bytes().await?;
        tracing::debug!(status = status.as_u16(), bytes = body.len(), "detect-change responded");
        Ok(DetectResponse::from_slice(&body)?)
    }

    /// Connect to the push-log endpoint.
    ///
    /// # Errors
    ///
    /// Fails if the connection cannot be made or the server rejects it.
    pub async fn open_logs(&self) -> Result<LogFeed, CliError> {
        let response = self
            .http
            .get(self.config.endpoint(LOGS_PATH))
            .header(ACCEPT, "text/event-stream")
            .send()
            .await?
            .error_for_status()?;
        tracing::debug!(status = response.status().as_u16(), "log stream connected");
        Ok(LogFeed {
            response,
            decoder: SseDecoder::new(),
            pending: VecDeque::new(),
        })
    }
}

async fn file_part(file: &SelectedFile<PathBuf>) -> Result<Part, CliError> {
    let bytes = tokio::fs::read(&file.file).await.map_err(|source| CliError::ReadFile {
        path: file.file.clone(),
        source,
    })?;
    Ok(Part::bytes(bytes)
        .file_name(file.display_name.clone())
        .mime_str(&file.media_type)?)
}

/// An open `/logs` response being decoded event by event.
#[derive(Debug)]
pub struct LogFeed {
    response: reqwest::Response,
    decoder: SseDecoder,
    pending: VecDeque<String>,
}

impl LogFeed {
    /// Next event payload, or `None` once the server ends the body.
    ///
    /// # Errors
    ///
    /// Returns the transport error if reading the body fails.
    pub async fn next_message(&mut self) -> Result<Option<String>, CliError> {
        loop {
            if let Some(message) = self.pending.pop_front() {
                return Ok(Some(message));
            }
            let Some(chunk) = self.response.chunk().await? else {
                if self.decoder.has_pending() {
                    tracing::debug!("log stream ended mid-event");
                }
                return Ok(None);
            };
            self.pending.extend(self.decoder.feed(&chunk));
        }
    }
}
