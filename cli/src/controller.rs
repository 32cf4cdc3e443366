//! Runs a [`CliSession`] against the backend.
//!
//! DESIGN
//! ======
//! The session, the printer and the task handles live behind one mutex.
//! Every report from a transport goes through [`Controller::update`], which
//! applies it to the session and then reconciles the handles: the animation
//! task follows `ellipsis().active_generation()` and the stream task is
//! cancelled once its generation stops being current. No lock is held across
//! an await.
//!
//! A run joins two futures. One reads `/logs` until the sentinel, an error,
//! the optional timeout, or cancellation. The other submits the images, then
//! gives the stream a bounded drain window before cancelling it.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use session::{Rendered, SelectedFile, Session, Slot, TICK_PERIOD};
use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at};
use tokio_util::sync::CancellationToken;
use tracing::Instrument;
use uuid::Uuid;

use crate::error::CliError;
use crate::files::{self, LocalPreview};
use crate::net::Backend;
use crate::printer::Printer;
use crate::ticker::EllipsisTicker;

pub type CliSession = Session<PathBuf, LocalPreview>;

struct State {
    session: CliSession,
    printer: Printer,
    ticker: EllipsisTicker,
    stream: Option<StreamTask>,
}

struct StreamTask {
    generation: u64,
    cancel: CancellationToken,
}

impl State {
    fn reconcile(&mut self, shared: &Arc<Mutex<State>>) {
        let wanted = self.session.ellipsis().active_generation();
        self.ticker
            .sync(wanted, |generation| spawn_ticker(generation, Arc::clone(shared)));

        let current = self.session.stream().open_generation();
        if let Some(task) = self.stream.take_if(|task| Some(task.generation) != current) {
            task.cancel.cancel();
        }

        self.printer.render(self.session.terminal());
    }
}

fn lock(shared: &Mutex<State>) -> MutexGuard<'_, State> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

fn spawn_ticker(generation: u64, shared: Arc<Mutex<State>>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
        loop {
            interval.tick().await;
            let mut guard = lock(&shared);
            let state = &mut *guard;
            if !state.session.tick_ellipsis(generation) {
                break;
            }
            state.printer.render(state.session.terminal());
        }
    })
}

async fn expire(timeout: Option<Duration>) {
    match timeout {
        Some(timeout) => tokio::time::sleep(timeout).await,
        None => std::future::pending().await,
    }
}

#[derive(Clone)]
pub struct Controller {
    shared: Arc<Mutex<State>>,
    backend: Backend,
}

impl Controller {
    #[must_use]
    pub fn new(backend: Backend, printer: Printer) -> Self {
        let state = State {
            session: CliSession::default(),
            printer,
            ticker: EllipsisTicker::default(),
            stream: None,
        };
        Self {
            shared: Arc::new(Mutex::new(state)),
            backend,
        }
    }

    /// Apply `apply` to the session, then bring timers, streams and output
    /// in line with the result.
    pub fn update<R>(&self, apply: impl FnOnce(&mut CliSession) -> R) -> R {
        let mut state = lock(&self.shared);
        let result = apply(&mut state.session);
        state.reconcile(&self.shared);
        result
    }

    pub fn read<R>(&self, view: impl FnOnce(&CliSession) -> R) -> R {
        view(&lock(&self.shared).session)
    }

    /// Put the file at `path` into `slot`.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::ReadFile`] if `path` is not a readable file.
    pub fn select_file(&self, slot: Slot, path: &Path) -> Result<bool, CliError> {
        let file = files::pick(path)?;
        Ok(self.update(|session| session.select_file(slot, [file], LocalPreview::for_file)))
    }

    /// Validate, submit and follow one analysis run.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Analysis`] for validation, backend and transport
    /// failures. The matching line has already been logged.
    pub async fn run_analysis(&self) -> Result<Rendered, CliError> {
        let start = self.update(|session| session.begin_analysis())?;
        let generation = start.stream_generation;
        let span = tracing::info_span!("analysis", run_id = %Uuid::new_v4(), generation);

        async {
            let cancel = self.attach_stream(generation);
            let submission = async {
                let outcome = self.submit(&start.before, &start.after).await;
                self.drain(&cancel).await;
                outcome
            };
            let ((), outcome) = tokio::join!(self.follow_stream(generation, cancel.clone()), submission);
            outcome
        }
        .instrument(span)
        .await
    }

    /// Follow `/logs` without submitting anything.
    pub async fn watch_logs(&self) {
        let open = self.update(|session| session.start_stream());
        let cancel = self.attach_stream(open.generation);
        self.follow_stream(open.generation, cancel).await;
    }

    /// Terminate any half-written output line.
    pub fn finish(&self) {
        lock(&self.shared).printer.finish();
    }

    fn attach_stream(&self, generation: u64) -> CancellationToken {
        let cancel = CancellationToken::new();
        let task = StreamTask {
            generation,
            cancel: cancel.clone(),
        };
        if let Some(previous) = lock(&self.shared).stream.replace(task) {
            previous.cancel.cancel();
        }
        cancel
    }

    async fn submit(
        &self,
        before: &SelectedFile<PathBuf>,
        after: &SelectedFile<PathBuf>,
    ) -> Result<Rendered, CliError> {
        match self.backend.submit(before, after).await {
            Ok(response) => Ok(self.update(|session| session.on_response(response))?),
            Err(err) => Err(self
                .update(|session| session.on_transport_failure(&err.to_string()))
                .into()),
        }
    }

    async fn drain(&self, cancel: &CancellationToken) {
        let window = self.backend.config().drain;
        tokio::select! {
            () = cancel.cancelled() => {}
            () = tokio::time::sleep(window) => {
                tracing::debug!(?window, "log stream still open after drain window");
                cancel.cancel();
            }
        }
    }

    async fn follow_stream(&self, generation: u64, cancel: CancellationToken) {
        let timeout = self.backend.config().stream_timeout;
        tokio::select! {
            () = cancel.cancelled() => tracing::debug!(generation, "log stream cancelled"),
            () = self.pump_stream(generation) => {}
            () = expire(timeout) => tracing::warn!(generation, ?timeout, "log stream timed out"),
        }
        cancel.cancel();
        self.update(|session| {
            if session.stream().is_current(generation) {
                session.cancel_stream();
            }
        });
    }

    async fn pump_stream(&self, generation: u64) {
        let mut feed = match self.backend.open_logs().await {
            Ok(feed) => feed,
            Err(err) => {
                self.update(|session| session.on_stream_error(generation, &err.to_string()));
                return;
            }
        };
        loop {
            let disposition = match feed.next_message().await {
                Ok(Some(raw)) => self.update(|session| session.on_stream_message(generation, &raw)),
                Ok(None) => self.update(|session| session.on_stream_error(generation, "log stream ended")),
                Err(err) => self.update(|session| session.on_stream_error(generation, &err.to_string())),
            };
            if disposition.is_terminal() {
                return;
            }
        }
    }
}
