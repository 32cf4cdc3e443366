//! Terminal rendering of the log panel.
//!
//! On a TTY the newest line stays open so ellipsis ticks rewrite it in place.
//! Anywhere else each line is printed once, when it is appended, and the dot
//! animation is not shown.

#[cfg(test)]
#[path = "printer_test.rs"]
mod printer_test;

use std::io::{self, IsTerminal, Write};

use session::{GeoJsonPanel, LogLine, Severity, Terminal};

pub struct Printer {
    out: Box<dyn Write + Send>,
    live: bool,
    scroll_seq: u64,
    open_line: Option<String>,
}

impl Printer {
    /// Print to stderr, rewriting in place when it is a terminal.
    #[must_use]
    pub fn stderr() -> Self {
        let live = io::stderr().is_terminal();
        Self::new(Box::new(io::stderr()), live)
    }

    /// Discard all output.
    #[must_use]
    pub fn sink() -> Self {
        Self::new(Box::new(io::sink()), false)
    }

    #[must_use]
    pub fn new(out: Box<dyn Write + Send>, live: bool) -> Self {
        Self {
            out,
            live,
            scroll_seq: 0,
            open_line: None,
        }
    }

    /// Bring the output up to date with `terminal`.
    pub fn render(&mut self, terminal: &Terminal) {
        if let Err(err) = self.write_terminal(terminal) {
            tracing::debug!(error = %err, "log output failed");
        }
    }

    /// Terminate the open line, if any.
    pub fn finish(&mut self) {
        if self.open_line.take().is_some() {
            let _ = writeln!(self.out);
            let _ = self.out.flush();
        }
    }

    fn write_terminal(&mut self, terminal: &Terminal) -> io::Result<()> {
        let lines = terminal.lines();
        let appended = usize::try_from(terminal.scroll_seq().wrapping_sub(self.scroll_seq))
            .unwrap_or(usize::MAX)
            .min(lines.len());
        self.scroll_seq = terminal.scroll_seq();

        for line in &lines[lines.len() - appended..] {
            self.close_line()?;
            if self.live {
                write!(self.out, "{}", format_line(line))?;
                self.open_line = Some(line.text.clone());
            } else {
                writeln!(self.out, "{}", format_line(line))?;
            }
        }

        if self.live {
            if let Some(last) = lines.last() {
                if self.open_line.as_deref() != Some(last.text.as_str()) {
                    write!(self.out, "\r\x1b[2K{}", format_line(last))?;
                    self.open_line = Some(last.text.clone());
                }
            }
        }
        self.out.flush()
    }

    fn close_line(&mut self) -> io::Result<()> {
        if self.open_line.take().is_some() {
            writeln!(self.out)?;
        }
        Ok(())
    }
}

/// One log line with its severity marker.
#[must_use]
pub fn format_line(line: &LogLine) -> String {
    let marker = match line.severity {
        Severity::Info => " ",
        Severity::Success => "+",
        Severity::Error => "!",
    };
    format!("[{marker}] {}", line.text)
}

/// Titled, pretty-printed GeoJSON block for stdout.
#[must_use]
pub fn format_panel(panel: &GeoJsonPanel) -> String {
    format!("{}\n{}", session::geojson::PANEL_TITLE, panel.pretty())
}
