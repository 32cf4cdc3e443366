//! Native front-end for the change-detection backend.
//!
//! The binary in `main.rs` parses arguments and wires these modules together.
//! They live in a library so the integration tests can drive a
//! [`controller::Controller`] against a stub backend.

pub mod config;
pub mod controller;
pub mod error;
pub mod files;
pub mod net;
pub mod output;
pub mod printer;
mod ticker;

pub use config::ClientConfig;
pub use controller::{CliSession, Controller};
pub use error::CliError;
