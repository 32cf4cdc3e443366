//! GeoJSON result panel with a download control.

use leptos::prelude::*;
use session::geojson::{DOWNLOAD_LABEL, PANEL_ID, PANEL_TITLE};

use crate::state::analysis::UiSession;
use crate::util::download;

/// Renders nothing until a run produces a document; each new document
/// replaces the previous panel.
#[component]
pub fn GeoJsonViewer() -> impl IntoView {
    let session = expect_context::<RwSignal<UiSession>>();

    move || {
        session.with(|state| {
            state.geojson().map(|panel| {
                let artifact = panel.download();
                let pretty = panel.pretty().to_owned();
                view! {
                    <div id=PANEL_ID class="geojson-container">
                        <div class="geojson-header">
                            <h3>{PANEL_TITLE}</h3>
                            <button class="geojson-download" on:click=move |_| download::save(&artifact)>
                                {DOWNLOAD_LABEL}
                            </button>
                        </div>
                        <pre>{pretty}</pre>
                    </div>
                }
            })
        })
    }
}
