//! Browser helpers shared by components.

pub mod animator;
pub mod download;
pub mod object_url;
