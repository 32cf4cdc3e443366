use super::*;

#[test]
fn starts_closed() {
    let stream = LogStream::default();
    assert_eq!(stream.state(), StreamState::Closed);
    assert_eq!(stream.open_generation(), None);
}

#[test]
fn open_from_closed_replaces_nothing() {
    let mut stream = LogStream::default();
    let open = stream.open();
    assert_eq!(open.replaced, None);
    assert_eq!(stream.state(), StreamState::Open { generation: open.generation });
    assert!(stream.is_current(open.generation));
}

#[test]
fn reopening_closes_the_previous_connection() {
    let mut stream = LogStream::default();
    let first = stream.open();
    let second = stream.open();
    assert_eq!(second.replaced, Some(first.generation));
    assert!(!stream.is_current(first.generation));
    assert!(stream.is_current(second.generation));
}

#[test]
fn close_is_terminal_and_idempotent() {
    let mut stream = LogStream::default();
    let open = stream.open();
    assert_eq!(stream.close(), Some(open.generation));
    assert_eq!(stream.close(), None);
    assert!(!stream.is_current(open.generation));
}

#[test]
fn terminal_dispositions() {
    assert!(StreamDisposition::Stale.is_terminal());
    assert!(StreamDisposition::Finished.is_terminal());
    assert!(!StreamDisposition::Ignored.is_terminal());
    assert!(!StreamDisposition::Logged.is_terminal());
}
