use std::sync::{Arc, Mutex};

use session::Terminal;

use super::*;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn printer(live: bool) -> (Printer, Captured) {
    let captured = Captured::default();
    (Printer::new(Box::new(captured.clone()), live), captured)
}

#[test]
fn plain_output_prints_each_line_once() {
    let (mut printer, captured) = printer(false);
    let mut terminal = Terminal::default();
    terminal.log("Loading model");
    printer.render(&terminal);
    printer.render(&terminal);
    terminal.log("Change detection complete, 12 pixels changed");
    printer.render(&terminal);

    assert_eq!(
        captured.text(),
        "[ ] Loading model\n[+] Change detection complete, 12 pixels changed\n"
    );
}

#[test]
fn plain_output_skips_animation_rewrites() {
    let (mut printer, captured) = printer(false);
    let mut session = session::Session::<(), crate::files::LocalPreview>::default();
    let open = session.start_stream();
    session.on_stream_message(open.generation, "Loading model");
    printer.render(session.terminal());
    let ticker = session.ellipsis().active_generation().unwrap();
    session.tick_ellipsis(ticker);
    printer.render(session.terminal());

    assert_eq!(captured.text(), "[ ] Loading model\n");
}

#[test]
fn live_output_rewrites_the_open_line() {
    let (mut printer, captured) = printer(true);
    let mut session = session::Session::<(), crate::files::LocalPreview>::default();
    let open = session.start_stream();
    session.on_stream_message(open.generation, "Loading model");
    printer.render(session.terminal());
    let ticker = session.ellipsis().active_generation().unwrap();
    session.tick_ellipsis(ticker);
    printer.render(session.terminal());
    printer.finish();

    assert_eq!(captured.text(), "[ ] Loading model\r\x1b[2K[ ] Loading model.\n");
}

#[test]
fn cleared_terminal_prints_new_run_from_the_top() {
    let (mut printer, captured) = printer(false);
    let mut terminal = Terminal::default();
    terminal.log("old run");
    printer.render(&terminal);
    terminal.clear();
    terminal.log("Analysis started");
    printer.render(&terminal);

    assert_eq!(captured.text(), "[ ] old run\n[ ] Analysis started\n");
}

#[test]
fn errors_are_marked() {
    let (mut printer, captured) = printer(false);
    let mut terminal = Terminal::default();
    terminal.log_error("Upload both images");
    printer.render(&terminal);
    assert_eq!(captured.text(), "[!] Upload both images\n");
}
