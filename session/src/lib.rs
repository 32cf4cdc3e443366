//! Controller core for the change-detection console.
//!
//! This crate is UI-framework agnostic: the Leptos page and the native CLI
//! both drive the same [`Session`] and differ only in how they run timers,
//! open the push-log stream and submit the images.

pub mod analysis;
pub mod ellipsis;
pub mod error;
pub mod geojson;
pub mod severity;
pub mod slot;
pub mod stream;
pub mod terminal;

pub use analysis::{AnalysisStart, Rendered, STARTED_MESSAGE, Session};
pub use ellipsis::{Ellipsis, TICK_PERIOD};
pub use error::{AnalysisError, TRANSPORT_MESSAGE, VALIDATION_MESSAGE};
pub use geojson::{GeoJsonPanel, GeoJsonViewer};
pub use severity::Severity;
pub use slot::{FileSlot, Preview, PreviewHandle, SelectedFile, Slot};
pub use stream::{LogStream, StreamDisposition, StreamOpen, StreamState};
pub use terminal::{LogLine, Terminal};
