//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the shared session signal from Leptos context and route
//! every mutation through `state::analysis::update`.

pub mod analyze_button;
pub mod file_picker;
pub mod geojson_viewer;
pub mod log_terminal;
