//! # client
//!
//! Leptos + WASM front-end for the change-detection backend. Renders the two
//! image pickers, the analyze button, the GeoJSON panel and the log terminal,
//! and drives the browser side of a run: the multipart upload, the `/logs`
//! event source and the dot animation timer.
//!
//! All browser I/O is gated behind the `csr` feature so the pure helpers in
//! this crate still build and test natively.

pub mod app;
pub mod components;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
