//! Typed JSON events shared by all commands.
//!
//! Per-step events (`file_written`, `command_started`, ...) come from the
//! library's `JsonEventSink`; these cover the envelope around them.

use serde::Serialize;

use sitemode::application::StatusReport;

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
            dry_run: None,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = Some(dry_run);
        self
    }
}

/// Event emitted when a command finishes, successfully or not.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
    /// Machine-readable outcome, e.g. `deploy_failed`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<&'static str>,
    pub exit_code: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl<'a> CompleteEvent<'a> {
    pub fn success(command: &'a str) -> Self {
        Self {
            event: "complete",
            command,
            success: true,
            outcome: None,
            exit_code: 0,
            duration_ms: None,
        }
    }

    pub fn failure(command: &'a str, exit_code: i32) -> Self {
        Self {
            event: "complete",
            command,
            success: false,
            outcome: None,
            exit_code,
            duration_ms: None,
        }
    }

    pub fn with_outcome(mut self, outcome: &'static str) -> Self {
        self.outcome = Some(outcome);
        self
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }
}

/// Event emitted when a command aborts with an error.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(command: &'a str, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            command,
            code,
            message: message.into(),
            help: None,
        }
    }

    pub fn with_help(mut self, help: Option<String>) -> Self {
        self.help = help;
        self
    }
}

/// Event emitted by `status` with the inferred mode.
#[derive(Debug, Clone, Serialize)]
pub struct StatusEvent<'a> {
    pub event: &'static str,
    pub command: &'static str,
    pub mode: &'static str,
    pub publish_dir: String,
    pub index_name: &'a str,
    pub index_hash: Option<&'a str>,
    pub maintenance_hash: Option<&'a str>,
    pub bundle_complete: bool,
    pub missing_sources: Vec<String>,
}

impl<'a> StatusEvent<'a> {
    pub fn from_report(report: &'a StatusReport) -> Self {
        Self {
            event: "status",
            command: "status",
            mode: report.mode.as_str(),
            publish_dir: report.publish_dir.display().to_string(),
            index_name: &report.index_name,
            index_hash: report.index_hash.as_ref().map(|h| h.as_str()),
            maintenance_hash: report.maintenance_hash.as_ref().map(|h| h.as_str()),
            bundle_complete: report.bundle_complete(),
            missing_sources: report
                .missing_sources
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
        }
    }
}
