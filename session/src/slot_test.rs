use std::cell::RefCell;
use std::rc::Rc;

use super::*;

type Journal = Rc<RefCell<Vec<String>>>;

#[derive(Debug)]
struct TrackedUrl {
    url: String,
    journal: Journal,
}

impl PreviewHandle for TrackedUrl {
    fn url(&self) -> &str {
        &self.url
    }
}

impl Drop for TrackedUrl {
    fn drop(&mut self) {
        self.journal.borrow_mut().push(format!("revoke {}", self.url));
    }
}

fn make(journal: &Journal) -> impl FnOnce(&SelectedFile<()>) -> Option<TrackedUrl> + '_ {
    move |file| {
        let url = format!("blob:{}", file.display_name);
        journal.borrow_mut().push(format!("create {url}"));
        Some(TrackedUrl {
            url,
            journal: Rc::clone(journal),
        })
    }
}

fn png(name: &str) -> SelectedFile<()> {
    SelectedFile::new((), name, "image/png")
}

#[test]
fn previewable_requires_image_type_and_non_tif_name() {
    assert!(png("before.png").is_previewable());
    assert!(SelectedFile::new((), "a.jpg", "image/jpeg").is_previewable());
    assert!(!SelectedFile::new((), "scene.tif", "image/tiff").is_previewable());
    assert!(!SelectedFile::new((), "notes.txt", "text/plain").is_previewable());
    assert!(!SelectedFile::new((), "blob", "").is_previewable());
}

#[test]
fn select_image_sets_label_and_local_preview() {
    let journal = Journal::default();
    let mut slot = FileSlot::<(), TrackedUrl>::default();
    assert!(slot.select(png("before.png"), make(&journal)));
    assert_eq!(slot.display_name(), Some("before.png"));
    assert!(slot.is_preview_visible());
    assert_eq!(slot.preview().map(|p| p.src().into_owned()).as_deref(), Some("blob:before.png"));
}

#[test]
fn replacing_a_preview_revokes_the_old_handle_first() {
    let journal = Journal::default();
    let mut slot = FileSlot::<(), TrackedUrl>::default();
    slot.select(png("one.png"), make(&journal));
    slot.select(png("two.png"), make(&journal));
    assert_eq!(
        *journal.borrow(),
        vec!["create blob:one.png", "revoke blob:one.png", "create blob:two.png"]
    );
}

#[test]
fn tif_selection_updates_label_but_keeps_previous_preview() {
    let journal = Journal::default();
    let mut slot = FileSlot::<(), TrackedUrl>::default();
    slot.select(png("one.png"), make(&journal));
    assert!(!slot.select(SelectedFile::new((), "scene.tif", "image/tiff"), make(&journal)));
    assert_eq!(slot.display_name(), Some("scene.tif"));
    assert_eq!(slot.preview().map(|p| p.src().into_owned()).as_deref(), Some("blob:one.png"));
    assert_eq!(*journal.borrow(), vec!["create blob:one.png"]);
}

#[test]
fn non_image_selection_without_prior_preview_stays_hidden() {
    let journal = Journal::default();
    let mut slot = FileSlot::<(), TrackedUrl>::default();
    slot.select(SelectedFile::new((), "data.csv", "text/csv"), make(&journal));
    assert_eq!(slot.display_name(), Some("data.csv"));
    assert!(!slot.is_preview_visible());
    assert!(journal.borrow().is_empty());
}

#[test]
fn backend_preview_releases_local_handle() {
    let journal = Journal::default();
    let mut slot = FileSlot::<(), TrackedUrl>::default();
    slot.select(png("one.png"), make(&journal));
    slot.show_backend_preview(PreviewImage::new("QUJD"));
    assert_eq!(*journal.borrow(), vec!["create blob:one.png", "revoke blob:one.png"]);
    assert_eq!(
        slot.preview().map(|p| p.src().into_owned()).as_deref(),
        Some("data:image/png;base64,QUJD")
    );
}

#[test]
fn dropping_the_slot_releases_its_handle() {
    let journal = Journal::default();
    {
        let mut slot = FileSlot::<(), TrackedUrl>::default();
        slot.select(png("one.png"), make(&journal));
    }
    assert_eq!(*journal.borrow(), vec!["create blob:one.png", "revoke blob:one.png"]);
}

#[test]
fn slot_field_names_match_the_multipart_form() {
    assert_eq!(Slot::Before.field_name(), "before");
    assert_eq!(Slot::After.field_name(), "after");
}
