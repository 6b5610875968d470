//! Event Sink Implementations
//!
//! Provides concrete implementations of LoadEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//! - ConsoleEventSink: human-readable progress lines

mod console;
mod json;

pub use console::ConsoleEventSink;
pub use json::JsonEventSink;
