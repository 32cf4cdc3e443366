//! The UI-session controller.
//!
//! DESIGN
//! ======
//! `Session` owns every piece of per-page state: the log panel, the dot
//! animator, both file slots, the GeoJSON panel and the push-log connection.
//! The "at most one" rules for the connection and the panel are enforced by
//! ownership here instead of by page-level globals.
//!
//! Methods are synchronous reducers. Front-ends run the actual timer, stream
//! and HTTP request, report what happened through these methods, and then
//! reconcile their handles against [`Session::ellipsis`] and
//! [`Session::stream`].

#[cfg(test)]
#[path = "analysis_test.rs"]
mod analysis_test;

use protocol::{ChangeStats, DetectResponse, StreamMessage};

use crate::ellipsis::Ellipsis;
use crate::error::{AnalysisError, TRANSPORT_MESSAGE, VALIDATION_MESSAGE};
use crate::geojson::{GeoJsonPanel, GeoJsonViewer};
use crate::slot::{FileSlot, SelectedFile, Slot};
use crate::stream::{LogStream, StreamDisposition, StreamOpen};
use crate::terminal::Terminal;

/// First line of every run.
pub const STARTED_MESSAGE: &str = "Analysis started";

/// Everything a front-end needs to submit one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisStart<F> {
    /// Generation of the push-log connection opened for this run.
    pub stream_generation: u64,
    /// Connection closed to make room for this one.
    pub replaced_stream: Option<u64>,
    pub before: SelectedFile<F>,
    pub after: SelectedFile<F>,
}

/// Which parts of the page a successful response updated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rendered {
    pub before_preview: bool,
    pub after_preview: bool,
    pub geojson: bool,
    pub stats: Option<ChangeStats>,
}

#[derive(Debug)]
pub struct Session<F, P> {
    terminal: Terminal,
    ellipsis: Ellipsis,
    before: FileSlot<F, P>,
    after: FileSlot<F, P>,
    viewer: GeoJsonViewer,
    stream: LogStream,
}

impl<F, P> Default for Session<F, P> {
    fn default() -> Self {
        Self {
            terminal: Terminal::default(),
            ellipsis: Ellipsis::default(),
            before: FileSlot::default(),
            after: FileSlot::default(),
            viewer: GeoJsonViewer::default(),
            stream: LogStream::default(),
        }
    }
}

impl<F, P> Session<F, P> {
    #[must_use]
    pub fn terminal(&self) -> &Terminal {
        &self.terminal
    }

    #[must_use]
    pub fn ellipsis(&self) -> &Ellipsis {
        &self.ellipsis
    }

    #[must_use]
    pub fn stream(&self) -> &LogStream {
        &self.stream
    }

    #[must_use]
    pub fn slot(&self, slot: Slot) -> &FileSlot<F, P> {
        match slot {
            Slot::Before => &self.before,
            Slot::After => &self.after,
        }
    }

    #[must_use]
    pub fn geojson(&self) -> Option<&GeoJsonPanel> {
        self.viewer.panel()
    }

    /// Append a classified line to the log panel.
    pub fn log(&mut self, message: &str) {
        self.terminal.log(message);
    }

    /// Record a picker change. Only the first file counts; an empty list is
    /// a no-op. Returns whether a local preview was attempted.
    pub fn select_file(
        &mut self,
        slot: Slot,
        files: impl IntoIterator<Item = SelectedFile<F>>,
        make_preview: impl FnOnce(&SelectedFile<F>) -> Option<P>,
    ) -> bool {
        let Some(file) = files.into_iter().next() else {
            return false;
        };
        tracing::debug!(?slot, name = %file.display_name, media_type = %file.media_type, "file selected");
        self.slot_mut(slot).select(file, make_preview)
    }

    /// Render a GeoJSON document, replacing any existing panel.
    pub fn show_geojson(&mut self, document: serde_json::Value) -> &GeoJsonPanel {
        self.viewer.render(document)
    }

    /// Open a push-log connection, closing any that is still open.
    pub fn start_stream(&mut self) -> StreamOpen {
        let open = self.stream.open();
        if let Some(replaced) = open.replaced {
            tracing::debug!(replaced, generation = open.generation, "log stream replaced");
        }
        open
    }

    /// Forward one push-log payload from connection `generation`.
    pub fn on_stream_message(&mut self, generation: u64, raw: &str) -> StreamDisposition {
        if !self.stream.is_current(generation) {
            return StreamDisposition::Stale;
        }
        match StreamMessage::parse(raw) {
            StreamMessage::Idle => StreamDisposition::Ignored,
            StreamMessage::Done => {
                self.ellipsis.stop();
                self.stream.close();
                tracing::debug!(generation, "log stream reached sentinel");
                StreamDisposition::Finished
            }
            StreamMessage::Line(text) => {
                self.terminal.log(&text);
                self.ellipsis.start();
                StreamDisposition::Logged
            }
        }
    }

    /// Tear down connection `generation` after a transport failure. Nothing
    /// is logged to the panel; the submission path reports user-facing errors.
    pub fn on_stream_error(&mut self, generation: u64, error: &str) -> StreamDisposition {
        if !self.stream.is_current(generation) {
            return StreamDisposition::Stale;
        }
        self.ellipsis.stop();
        self.stream.close();
        tracing::debug!(generation, %error, "log stream closed after error");
        StreamDisposition::Finished
    }

    /// Close the current connection on the front-end's initiative (timeout,
    /// shutdown). Returns the closed generation.
    pub fn cancel_stream(&mut self) -> Option<u64> {
        let closed = self.stream.close();
        if closed.is_some() {
            self.ellipsis.stop();
        }
        closed
    }

    /// Advance the dot animation for timer `generation`.
    pub fn tick_ellipsis(&mut self, generation: u64) -> bool {
        self.ellipsis.tick(generation, &mut self.terminal)
    }

    /// Apply a parsed `/detect-change` response.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Backend`] when the response carries an error
    /// message; previews and GeoJSON are then left untouched.
    pub fn on_response(&mut self, response: DetectResponse) -> Result<Rendered, AnalysisError> {
        self.ellipsis.stop();

        if let Some(message) = response.error_message() {
            tracing::warn!(%message, "backend reported an error");
            self.terminal.log_error(message);
            return Err(AnalysisError::Backend(message.to_owned()));
        }

        let mut rendered = Rendered {
            stats: response.stats,
            ..Rendered::default()
        };
        if let Some(image) = response.before_image() {
            self.before.show_backend_preview(image);
            rendered.before_preview = true;
        }
        if let Some(image) = response.after_image() {
            self.after.show_backend_preview(image);
            rendered.after_preview = true;
        }
        if let Some(document) = response.geojson_document() {
            self.viewer.render(document.clone());
            rendered.geojson = true;
        }
        Ok(rendered)
    }

    /// Record a failed submission. `detail` goes to diagnostics only.
    pub fn on_transport_failure(&mut self, detail: &str) -> AnalysisError {
        self.ellipsis.stop();
        tracing::error!(error = %detail, "analysis request failed");
        self.terminal.log_error(TRANSPORT_MESSAGE);
        AnalysisError::Transport(detail.to_owned())
    }

    /// Give up on a run that never reached the backend: log the transport
    /// failure and close its log stream.
    pub fn abandon_run(&mut self, detail: &str) -> AnalysisError {
        let error = self.on_transport_failure(detail);
        self.cancel_stream();
        error
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut FileSlot<F, P> {
        match slot {
            Slot::Before => &mut self.before,
            Slot::After => &mut self.after,
        }
    }
}

impl<F: Clone, P> Session<F, P> {
    /// Validate the selection and start a run: clear the panel, log the start
    /// line and open a fresh push-log connection.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Validation`] if either slot is empty. The
    /// validation line is logged and no connection is opened.
    pub fn begin_analysis(&mut self) -> Result<AnalysisStart<F>, AnalysisError> {
        let (Some(before), Some(after)) = (self.before.selected(), self.after.selected()) else {
            tracing::warn!(
                before = self.before.selected().is_some(),
                after = self.after.selected().is_some(),
                "analysis requested without both files"
            );
            self.terminal.log_error(VALIDATION_MESSAGE);
            return Err(AnalysisError::Validation);
        };
        let (before, after) = (before.clone(), after.clone());

        self.terminal.clear();
        self.terminal.log(STARTED_MESSAGE);
        let open = self.start_stream();
        tracing::info!(
            generation = open.generation,
            before = %before.display_name,
            after = %after.display_name,
            "analysis started"
        );

        Ok(AnalysisStart {
            stream_generation: open.generation,
            replaced_stream: open.replaced,
            before,
            after,
        })
    }
}
