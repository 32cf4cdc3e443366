//! Analyze button: validates the selection and drives one run.

use leptos::prelude::*;

use crate::state::analysis::UiSession;

pub const ANALYZE_LABEL: &str = "Analyze";

#[component]
pub fn AnalyzeButton() -> impl IntoView {
    let session = expect_context::<RwSignal<UiSession>>();

    let on_click = move |_: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        run_analysis(session);
        #[cfg(not(feature = "csr"))]
        let _ = session;
    };

    view! {
        <button id="analyzeBtn" class="analyze-btn" on:click=on_click>
            {ANALYZE_LABEL}
        </button>
    }
}

#[cfg(feature = "csr")]
fn run_analysis(session: RwSignal<UiSession>) {
    use session::Slot;

    use crate::components::file_picker::chosen;
    use crate::net::{api, log_stream};
    use crate::state::analysis::update;

    let Some(Ok(start)) = update(session, UiSession::begin_analysis) else {
        return;
    };
    let (Some(before), Some(after)) = (chosen(Slot::Before), chosen(Slot::After)) else {
        update(session, |state| state.abandon_run("selected file is no longer available"));
        return;
    };

    log_stream::open(session, start.stream_generation);
    leptos::task::spawn_local(async move {
        match api::submit(&before, &after).await {
            Ok(response) => match update(session, |state| state.on_response(response)) {
                Some(Ok(rendered)) => log::info!(
                    "analysis rendered: before={} after={} geojson={}",
                    rendered.before_preview,
                    rendered.after_preview,
                    rendered.geojson
                ),
                Some(Err(err)) => log::warn!("analysis failed: {err}"),
                None => {}
            },
            Err(detail) => {
                log::error!("analysis request failed: {detail}");
                update(session, |state| state.on_transport_failure(&detail));
            }
        }
    });
}
