//! Scrolling log panel.

#[cfg(test)]
#[path = "log_terminal_test.rs"]
mod log_terminal_test;

use leptos::prelude::*;
use session::Severity;

use crate::state::analysis::UiSession;

/// CSS classes for one line: the base class plus the severity modifier.
pub fn line_class(severity: Severity) -> String {
    format!("terminal-line {}", severity.as_str())
}

/// Log panel that follows its newest line.
#[component]
pub fn LogTerminal() -> impl IntoView {
    let session = expect_context::<RwSignal<UiSession>>();
    let panel_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "csr")]
    Effect::new(move || {
        let _ = session.with(|state| state.terminal().scroll_seq());
        if let Some(panel) = panel_ref.get() {
            panel.set_scroll_top(panel.scroll_height());
        }
    });

    view! {
        <div id="terminal" class="terminal" node_ref=panel_ref>
            {move || {
                session.with(|state| {
                    state
                        .terminal()
                        .lines()
                        .iter()
                        .map(|line| view! { <div class=line_class(line.severity)>{line.text.clone()}</div> })
                        .collect_view()
                })
            }}
        </div>
    }
}
