//! Browser timer behind the trailing-dot animation.

#[cfg(feature = "csr")]
use std::cell::RefCell;
use std::time::Duration;

#[cfg(feature = "csr")]
use gloo_timers::callback::Interval;
#[cfg(feature = "csr")]
use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::state::analysis::UiSession;

#[cfg(feature = "csr")]
thread_local! {
    static TICKER: RefCell<Option<(u64, Interval)>> = const { RefCell::new(None) };
}

/// `setInterval` delay for `period`, saturating at `u32::MAX` milliseconds.
pub fn interval_millis(period: Duration) -> u32 {
    u32::try_from(period.as_millis()).unwrap_or(u32::MAX)
}

/// Keep exactly one interval alive, for generation `wanted`.
#[cfg(feature = "csr")]
pub fn sync(session: RwSignal<UiSession>, wanted: Option<u64>) {
    TICKER.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.as_ref().map(|(generation, _)| *generation) == wanted {
            return;
        }
        *slot = wanted.map(|generation| {
            let tick = Interval::new(interval_millis(session::TICK_PERIOD), move || {
                session.try_update(|state| state.tick_ellipsis(generation));
            });
            (generation, tick)
        });
    });
}
