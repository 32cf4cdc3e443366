//! Trailing-dot animation on the most recent log line.
//!
//! The animator only holds state; drivers own the actual timer and call
//! [`Ellipsis::tick`] with the generation they were started for. A tick from
//! any generation other than the active one is rejected, so a timer that
//! outlives a restart can never double-step the animation.

#[cfg(test)]
#[path = "ellipsis_test.rs"]
mod ellipsis_test;

use std::time::Duration;

use crate::terminal::Terminal;

/// Interval between animation steps.
pub const TICK_PERIOD: Duration = Duration::from_millis(500);
/// Longest dot run before the cycle wraps to zero.
pub const MAX_DOTS: usize = 3;

#[derive(Clone, Debug, Default)]
pub struct Ellipsis {
    active: Option<u64>,
    generation: u64,
    dots: usize,
}

impl Ellipsis {
    /// Stop any running animation and start a fresh one. Returns the
    /// generation the driver's timer must present on each tick.
    pub fn start(&mut self) -> u64 {
        self.stop();
        self.generation = self.generation.wrapping_add(1);
        self.active = Some(self.generation);
        self.dots = 0;
        self.generation
    }

    /// Returns whether an animation was running.
    pub fn stop(&mut self) -> bool {
        self.active.take().is_some()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    #[must_use]
    pub fn active_generation(&self) -> Option<u64> {
        self.active
    }

    /// Advance one step and rewrite the last line. Returns `false` when
    /// `generation` is no longer active and the caller's timer should end.
    pub fn tick(&mut self, generation: u64, terminal: &mut Terminal) -> bool {
        if self.active != Some(generation) {
            return false;
        }
        self.dots = if self.dots < MAX_DOTS { self.dots + 1 } else { 0 };
        if let Some(line) = terminal.last_mut() {
            line.text = with_dots(&line.text, self.dots);
        }
        true
    }
}

/// Replace the trailing run of dots in `text` with exactly `dots` dots.
#[must_use]
pub fn with_dots(text: &str, dots: usize) -> String {
    let mut out = text.trim_end_matches('.').to_owned();
    out.push_str(&".".repeat(dots));
    out
}
