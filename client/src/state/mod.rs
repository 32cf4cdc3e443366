//! Reactive application state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns exactly one `session::Session`, stored in an `RwSignal` and
//! shared through Leptos context. Components read it reactively; every
//! mutation goes through [`analysis::update`] so browser handles stay in step
//! with the session.

pub mod analysis;
