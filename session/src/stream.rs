//! Push-log connection lifecycle: CLOSED → OPEN → CLOSED.
//!
//! SYSTEM CONTEXT
//! ==============
//! Transports (`EventSource` in the browser, a chunked HTTP body natively)
//! live in the front-end crates. This module only decides which connection
//! is current; each open gets a new generation and anything reported by an
//! older generation is stale.

#[cfg(test)]
#[path = "stream_test.rs"]
mod stream_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StreamState {
    #[default]
    Closed,
    Open {
        generation: u64,
    },
}

/// Result of [`LogStream::open`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StreamOpen {
    pub generation: u64,
    /// Connection that was still open and got closed to make room.
    pub replaced: Option<u64>,
}

/// What the session did with one stream report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StreamDisposition {
    /// Report came from a superseded or closed connection.
    Stale,
    /// Idle marker; nothing changed.
    Ignored,
    /// Line forwarded to the log panel.
    Logged,
    /// Sentinel or transport error; the connection is now closed.
    Finished,
}

impl StreamDisposition {
    /// True when the reporting transport should stop reading.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Stale | Self::Finished)
    }
}

#[derive(Clone, Debug, Default)]
pub struct LogStream {
    state: StreamState,
    generation: u64,
}

impl LogStream {
    /// Close any open connection and open a new one.
    pub fn open(&mut self) -> StreamOpen {
        let replaced = self.close();
        self.generation = self.generation.wrapping_add(1);
        self.state = StreamState::Open {
            generation: self.generation,
        };
        StreamOpen {
            generation: self.generation,
            replaced,
        }
    }

    /// Close the current connection, returning its generation if one was open.
    pub fn close(&mut self) -> Option<u64> {
        match std::mem::take(&mut self.state) {
            StreamState::Open { generation } => Some(generation),
            StreamState::Closed => None,
        }
    }

    #[must_use]
    pub fn state(&self) -> StreamState {
        self.state
    }

    #[must_use]
    pub fn open_generation(&self) -> Option<u64> {
        match self.state {
            StreamState::Open { generation } => Some(generation),
            StreamState::Closed => None,
        }
    }

    #[must_use]
    pub fn is_current(&self, generation: u64) -> bool {
        self.open_generation() == Some(generation)
    }
}
