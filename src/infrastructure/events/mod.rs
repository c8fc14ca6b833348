//! Event Sink Implementations
//!
//! Concrete implementations of SiteEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//!
//! The console sink lives with the rest of the terminal UI in the binary.

mod json;

pub use json::JsonEventSink;
