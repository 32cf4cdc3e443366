//! Image picker with inline preview.
//!
//! The chosen `web_sys::File` stays here until submission; the session only
//! records its name and media type.

#[cfg(test)]
#[path = "file_picker_test.rs"]
mod file_picker_test;

#[cfg(feature = "csr")]
use std::cell::RefCell;

use leptos::prelude::*;
use session::Slot;

use crate::state::analysis::UiSession;

#[cfg(feature = "csr")]
thread_local! {
    static CHOSEN: RefCell<[Option<web_sys::File>; 2]> = const { RefCell::new([None, None]) };
}

/// Element ids used by the page stylesheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlotIds {
    pub input: &'static str,
    pub label: &'static str,
    pub preview: &'static str,
}

pub fn slot_ids(slot: Slot) -> SlotIds {
    match slot {
        Slot::Before => SlotIds {
            input: "beforeImage",
            label: "beforeLabel",
            preview: "beforePreview",
        },
        Slot::After => SlotIds {
            input: "afterImage",
            label: "afterLabel",
            preview: "afterPreview",
        },
    }
}

#[cfg(any(test, feature = "csr"))]
fn slot_index(slot: Slot) -> usize {
    match slot {
        Slot::Before => 0,
        Slot::After => 1,
    }
}

/// File most recently chosen for `slot`.
#[cfg(feature = "csr")]
pub fn chosen(slot: Slot) -> Option<web_sys::File> {
    CHOSEN.with(|chosen| chosen.borrow()[slot_index(slot)].clone())
}

#[cfg(feature = "csr")]
fn on_change(session: RwSignal<UiSession>, slot: Slot, ev: &leptos::ev::Event) {
    use session::SelectedFile;

    use crate::state::analysis::update;
    use crate::util::object_url::ObjectUrl;

    let input = event_target::<web_sys::HtmlInputElement>(ev);
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return;
    };
    CHOSEN.with(|chosen| chosen.borrow_mut()[slot_index(slot)] = Some(file.clone()));

    let selected = SelectedFile::new((), file.name(), file.type_());
    update(session, |state| {
        state.select_file(slot, [selected], |_| ObjectUrl::from_blob(&file))
    });
}

#[component]
pub fn FilePicker(slot: Slot) -> impl IntoView {
    let session = expect_context::<RwSignal<UiSession>>();
    let ids = slot_ids(slot);

    let handle_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        on_change(session, slot, &ev);
        #[cfg(not(feature = "csr"))]
        let _ = ev;
    };
    let name = move || session.with(|state| state.slot(slot).display_name().map(str::to_owned));
    let preview = move || {
        session.with(|state| {
            state
                .slot(slot)
                .preview()
                .map(|preview| preview.src().into_owned())
        })
    };

    view! {
        <div class="picker">
            <label class="picker__title" for=ids.input>{slot.title()}</label>
            <input id=ids.input class="picker__input" type="file" accept="image/*" on:change=handle_change/>
            <span id=ids.label class="picker__name">{name}</span>
            {move || {
                preview().map(|src| view! { <img id=ids.preview class="picker__preview" src=src alt=slot.title()/> })
            }}
        </div>
    }
}
