//! Session signal plus handle reconciliation.
//!
//! DESIGN
//! ======
//! The session decides which animation timer and which log stream should be
//! alive by generation number. After each mutation the browser-side owners
//! (`util::animator` and `net::log_stream`) drop anything whose generation is
//! no longer wanted.

use leptos::prelude::*;
use session::Session;

use crate::util::object_url::ObjectUrl;

/// Browser session. Files are held by the pickers, so the session only
/// tracks their metadata.
pub type UiSession = Session<(), ObjectUrl>;

/// Apply `apply` to the session and reconcile timer and stream handles.
/// Returns `None` if the signal has been disposed.
pub fn update<R>(session: RwSignal<UiSession>, apply: impl FnOnce(&mut UiSession) -> R) -> Option<R> {
    let result = session.try_update(apply)?;
    #[cfg(feature = "csr")]
    reconcile(session);
    Some(result)
}

#[cfg(feature = "csr")]
fn reconcile(session: RwSignal<UiSession>) {
    let Some((ticker, stream)) = session.try_with_untracked(|state| {
        (state.ellipsis().active_generation(), state.stream().open_generation())
    }) else {
        return;
    };
    crate::util::animator::sync(session, ticker);
    crate::net::log_stream::sync(stream);
}
