//! Browser transport for the detection backend.

pub mod api;
pub mod log_stream;
