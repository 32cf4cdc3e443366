//! Incremental `text/event-stream` decoder.
//!
//! Browsers get this for free from `EventSource`; native clients read the
//! `/logs` body chunk by chunk and feed it through [`SseDecoder`], which yields
//! the `data` payload of each dispatched event. Only the `data` field matters
//! to the push-log protocol, so `event`, `id` and `retry` are skipped.

#[cfg(test)]
#[path = "sse_test.rs"]
mod sse_test;

/// Streaming decoder that tolerates events split across arbitrary chunk
/// boundaries, including a `\r\n` pair split between two chunks.
#[derive(Debug, Default)]
pub struct SseDecoder {
    line: Vec<u8>,
    data: String,
    has_data: bool,
    skip_lf: bool,
}

impl SseDecoder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one chunk and return the payloads of every event it completes.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<String> {
        let mut events = Vec::new();
        for &byte in chunk {
            if self.skip_lf {
                self.skip_lf = false;
                if byte == b'\n' {
                    continue;
                }
            }
            match byte {
                b'\n' => self.end_line(&mut events),
                b'\r' => {
                    self.end_line(&mut events);
                    self.skip_lf = true;
                }
                _ => self.line.push(byte),
            }
        }
        events
    }

    /// True when a partially received event is buffered.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.has_data || !self.line.is_empty()
    }

    fn end_line(&mut self, events: &mut Vec<String>) {
        let raw = std::mem::take(&mut self.line);
        let line = String::from_utf8_lossy(&raw);

        if line.is_empty() {
            if self.has_data {
                events.push(std::mem::take(&mut self.data));
                self.has_data = false;
            }
            return;
        }
        if line.starts_with(':') {
            return;
        }

        let (field, value) = match line.split_once(':') {
            Some((field, value)) => (field, value.strip_prefix(' ').unwrap_or(value)),
            None => (line.as_ref(), ""),
        };
        if field != "data" {
            return;
        }
        if self.has_data {
            self.data.push('\n');
        }
        self.data.push_str(value);
        self.has_data = true;
    }
}
