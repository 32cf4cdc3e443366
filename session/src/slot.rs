//! File picker slots ("before" / "after") and their preview handles.
//!
//! A local preview is a revocable handle owned by the slot. It is dropped
//! before its replacement is created, so a slot never holds two live handles.

#[cfg(test)]
#[path = "slot_test.rs"]
mod slot_test;

use std::borrow::Cow;

use protocol::PreviewImage;

/// Which side of the comparison a file belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    Before,
    After,
}

impl Slot {
    pub const ALL: [Self; 2] = [Self::Before, Self::After];

    /// Multipart field carrying this slot's file.
    #[must_use]
    pub fn field_name(self) -> &'static str {
        match self {
            Self::Before => protocol::BEFORE_FIELD,
            Self::After => protocol::AFTER_FIELD,
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Before => "Before image",
            Self::After => "After image",
        }
    }
}

/// Local reference that renders a selected file without a network round trip.
///
/// Implementors release the underlying resource on drop.
pub trait PreviewHandle {
    fn url(&self) -> &str;
}

/// A file the user picked, plus the metadata the picker reports for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile<F> {
    pub file: F,
    pub display_name: String,
    pub media_type: String,
}

impl<F> SelectedFile<F> {
    pub fn new(file: F, display_name: impl Into<String>, media_type: impl Into<String>) -> Self {
        Self {
            file,
            display_name: display_name.into(),
            media_type: media_type.into(),
        }
    }

    /// Images render inline, except `.tif` which browsers cannot decode.
    #[must_use]
    pub fn is_previewable(&self) -> bool {
        self.media_type.starts_with("image/") && !self.display_name.ends_with(".tif")
    }
}

/// What a slot's preview currently shows.
#[derive(Debug)]
pub enum Preview<P> {
    /// Handle created from the selected file.
    Local(P),
    /// PNG rendered by the backend.
    Backend(PreviewImage),
}

impl<P: PreviewHandle> Preview<P> {
    /// Value for an `<img src>`.
    #[must_use]
    pub fn src(&self) -> Cow<'_, str> {
        match self {
            Self::Local(handle) => Cow::Borrowed(handle.url()),
            Self::Backend(image) => Cow::Owned(image.data_url()),
        }
    }
}

#[derive(Debug)]
pub struct FileSlot<F, P> {
    selected: Option<SelectedFile<F>>,
    preview: Option<Preview<P>>,
}

impl<F, P> Default for FileSlot<F, P> {
    fn default() -> Self {
        Self {
            selected: None,
            preview: None,
        }
    }
}

impl<F, P> FileSlot<F, P> {
    #[must_use]
    pub fn selected(&self) -> Option<&SelectedFile<F>> {
        self.selected.as_ref()
    }

    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.selected.as_ref().map(|file| file.display_name.as_str())
    }

    #[must_use]
    pub fn preview(&self) -> Option<&Preview<P>> {
        self.preview.as_ref()
    }

    #[must_use]
    pub fn is_preview_visible(&self) -> bool {
        self.preview.is_some()
    }

    /// Store `file` and, when it is previewable, swap in a new local preview
    /// built by `make_preview`. Returns whether a preview was attempted.
    ///
    /// Non-previewable files only replace the stored file and label; the
    /// current preview stays on screen.
    pub fn select(
        &mut self,
        file: SelectedFile<F>,
        make_preview: impl FnOnce(&SelectedFile<F>) -> Option<P>,
    ) -> bool {
        let previewable = file.is_previewable();
        let selected = self.selected.insert(file);
        if !previewable {
            return false;
        }
        self.preview = None;
        self.preview = make_preview(selected).map(Preview::Local);
        true
    }

    /// Show a backend-rendered preview, releasing any local handle first.
    pub fn show_backend_preview(&mut self, image: PreviewImage) {
        self.preview = None;
        self.preview = Some(Preview::Backend(image));
    }
}
