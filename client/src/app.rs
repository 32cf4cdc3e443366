//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use session::Slot;

use crate::components::analyze_button::AnalyzeButton;
use crate::components::file_picker::FilePicker;
use crate::components::geojson_viewer::GeoJsonViewer;
use crate::components::log_terminal::LogTerminal;
use crate::state::analysis::UiSession;

/// Root application component.
///
/// Provides the page's single session to every child component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(UiSession::default());
    provide_context(session);

    view! {
        <Title text="Change Detection"/>

        <main class="app">
            <h1 class="app__title">"Change Detection"</h1>
            <section class="pickers">
                <FilePicker slot=Slot::Before/>
                <FilePicker slot=Slot::After/>
            </section>
            <GeoJsonViewer/>
            <AnalyzeButton/>
            <LogTerminal/>
        </main>
    }
}
