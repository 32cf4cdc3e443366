//! `/logs` event source for one analysis run.
//!
//! At most one stream task is alive. Each is registered with the generation
//! the session assigned it, and [`sync`] aborts it as soon as that
//! generation is no longer the session's open stream.

#[cfg(feature = "csr")]
use std::cell::RefCell;

#[cfg(feature = "csr")]
use futures::StreamExt;
#[cfg(feature = "csr")]
use futures::future::{AbortHandle, Abortable};
#[cfg(feature = "csr")]
use gloo_net::eventsource::futures::EventSource;
#[cfg(feature = "csr")]
use leptos::prelude::*;
#[cfg(feature = "csr")]
use session::StreamDisposition;

#[cfg(feature = "csr")]
use crate::state::analysis::{UiSession, update};

/// DOM event type carrying unnamed server-sent events.
pub const MESSAGE_EVENT: &str = "message";

#[cfg(feature = "csr")]
thread_local! {
    static ACTIVE: RefCell<Option<(u64, AbortHandle)>> = const { RefCell::new(None) };
}

/// Start reading `/logs` for stream `generation`, replacing any older task.
#[cfg(feature = "csr")]
pub fn open(session: RwSignal<UiSession>, generation: u64) {
    let (handle, registration) = AbortHandle::new_pair();
    ACTIVE.with(|active| {
        if let Some((_, previous)) = active.borrow_mut().replace((generation, handle)) {
            previous.abort();
        }
    });
    leptos::task::spawn_local(async move {
        if Abortable::new(pump(session, generation), registration).await.is_err() {
            log::debug!("log stream {generation} aborted");
        }
    });
}

/// Abort the running task unless it belongs to `open_generation`.
#[cfg(feature = "csr")]
pub fn sync(open_generation: Option<u64>) {
    ACTIVE.with(|active| {
        let mut active = active.borrow_mut();
        if active.as_ref().map(|(generation, _)| *generation) == open_generation {
            return;
        }
        if let Some((_, handle)) = active.take() {
            handle.abort();
        }
    });
}

#[cfg(feature = "csr")]
async fn pump(session: RwSignal<UiSession>, generation: u64) {
    let mut source = match EventSource::new(protocol::LOGS_PATH) {
        Ok(source) => source,
        Err(err) => {
            update(session, |state| state.on_stream_error(generation, &format!("{err:?}")));
            return;
        }
    };
    let mut messages = match source.subscribe(MESSAGE_EVENT) {
        Ok(messages) => messages,
        Err(err) => {
            update(session, |state| state.on_stream_error(generation, &format!("{err:?}")));
            return;
        }
    };

    while let Some(item) = messages.next().await {
        let disposition = match item {
            Ok((_, event)) => {
                let data = event.data().as_string().unwrap_or_default();
                update(session, |state| state.on_stream_message(generation, &data))
            }
            Err(err) => update(session, |state| state.on_stream_error(generation, &format!("{err:?}"))),
        };
        if disposition.is_none_or(StreamDisposition::is_terminal) {
            break;
        }
    }
    source.close();
}
