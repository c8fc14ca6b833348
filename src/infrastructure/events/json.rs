//! JSON Event Sink
//!
//! Outputs site events as NDJSON for CI/automation consumption.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{SiteEvent, SiteEventSink};

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Name of the CLI command, repeated in every event
    command: &'static str,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout(command: &'static str) -> Self {
        Self::with_writer(command, io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(command: &'static str, writer: W) -> Self {
        Self {
            command,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl SiteEventSink for JsonEventSink {
    fn on_event(&self, event: SiteEvent) {
        let json = match event {
            SiteEvent::PublishDirReady { path, created } => {
                serde_json::json!({
                    "event": "publish_dir",
                    "command": self.command,
                    "path": path.display().to_string(),
                    "created": created,
                })
            }

            SiteEvent::FilePublished {
                source,
                destination,
                hash,
            } => {
                serde_json::json!({
                    "event": "file_written",
                    "command": self.command,
                    "source": source.display().to_string(),
                    "path": destination.display().to_string(),
                    "hash": hash.as_str(),
                })
            }

            SiteEvent::CommandPlanned {
                step,
                command,
                available,
            } => {
                serde_json::json!({
                    "event": "command_planned",
                    "command": self.command,
                    "step": step.as_str(),
                    "argv": command.argv(),
                    "available": available,
                })
            }

            SiteEvent::CommandStarted { step, command } => {
                serde_json::json!({
                    "event": "command_started",
                    "command": self.command,
                    "step": step.as_str(),
                    "argv": command.argv(),
                })
            }

            SiteEvent::CommandSucceeded { step } => {
                serde_json::json!({
                    "event": "command_succeeded",
                    "command": self.command,
                    "step": step.as_str(),
                })
            }

            SiteEvent::CommandFailed { step, error } => {
                serde_json::json!({
                    "event": "command_failed",
                    "command": self.command,
                    "step": step.as_str(),
                    "error": error,
                })
            }
        };

        self.write_event(json);
    }
}
