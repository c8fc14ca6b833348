//! Site Event Port
//!
//! Observable interface for the maintenance and restore operations.
//! Drives console progress lines and the `--json` NDJSON stream.

use std::path::PathBuf;

use crate::domain::value_objects::{CommandLine, ContentHash, Step};

/// Event emitted while an operation runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteEvent {
    /// Publish directory exists (or would be created in a dry run)
    PublishDirReady { path: PathBuf, created: bool },

    /// A bundle file was copied into the publish directory
    FilePublished {
        source: PathBuf,
        destination: PathBuf,
        hash: ContentHash,
    },

    /// Dry run: this command would be run
    CommandPlanned {
        step: Step,
        command: CommandLine,
        available: bool,
    },

    /// External command is about to start
    CommandStarted { step: Step, command: CommandLine },

    /// External command exited zero
    CommandSucceeded { step: Step },

    /// External command could not start or exited non-zero
    CommandFailed { step: Step, error: String },
}

/// Trait for receiving site events
///
/// Implementations:
/// - `ConsoleEventSink` (binary): progress lines on stdout
/// - `JsonEventSink`: NDJSON event stream for CI
/// - `NoopEventSink`: silent operation
pub trait SiteEventSink {
    /// Handle an event
    fn on_event(&self, event: SiteEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl SiteEventSink for NoopEventSink {
    fn on_event(&self, _event: SiteEvent) {}
}
