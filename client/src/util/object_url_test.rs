use session::{Preview, SelectedFile, Session, Slot};

use super::*;

#[test]
fn preview_src_is_the_blob_url() {
    let preview = Preview::Local(ObjectUrl::detached("blob:http://localhost/1"));
    assert_eq!(preview.src(), "blob:http://localhost/1");
}

#[test]
fn reselecting_replaces_the_preview_url() {
    let mut session = Session::<(), ObjectUrl>::default();
    let first = SelectedFile::new((), "a.png", "image/png");
    let second = SelectedFile::new((), "b.png", "image/png");
    session.select_file(Slot::Before, [first], |_| Some(ObjectUrl::detached("blob:1")));
    session.select_file(Slot::Before, [second], |_| Some(ObjectUrl::detached("blob:2")));

    let src = session.slot(Slot::Before).preview().map(|preview| preview.src().into_owned());
    assert_eq!(src.as_deref(), Some("blob:2"));
}
