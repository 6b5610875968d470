//! Infrastructure layer
//!
//! Concrete implementations of the domain ports: local and in-memory file
//! systems, file-backed sources, event sinks, and the in-memory item table.

pub mod cloning;
pub mod events;
pub mod fs;
pub mod repositories;
