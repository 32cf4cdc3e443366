//! Owner of the tokio task that drives the dot animation.

use tokio::task::JoinHandle;

/// At most one animation task, tagged with the generation it was spawned for.
#[derive(Debug, Default)]
pub(crate) struct EllipsisTicker {
    running: Option<(u64, JoinHandle<()>)>,
}

impl EllipsisTicker {
    /// Make the running task match `wanted`: abort a task for any other
    /// generation and spawn one for `wanted` if none is running.
    pub(crate) fn sync(&mut self, wanted: Option<u64>, spawn: impl FnOnce(u64) -> JoinHandle<()>) {
        if let Some((generation, handle)) = &self.running {
            if Some(*generation) == wanted && !handle.is_finished() {
                return;
            }
            handle.abort();
            self.running = None;
        }
        if let Some(generation) = wanted {
            self.running = Some((generation, spawn(generation)));
        }
    }

    #[cfg(test)]
    pub(crate) fn generation(&self) -> Option<u64> {
        self.running.as_ref().map(|(generation, _)| *generation)
    }
}

impl Drop for EllipsisTicker {
    fn drop(&mut self) {
        if let Some((_, handle)) = self.running.take() {
            handle.abort();
        }
    }
}
