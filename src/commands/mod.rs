//! Command handlers
//!
//! Each handler runs one use case, renders its result and reports how the
//! run finished. `main` turns that into the process exit status.

pub mod maintenance;
pub mod restore;
pub mod status;

use sitemode::domain::ports::{SiteEventSink, StdioMode};
use sitemode::infrastructure::JsonEventSink;

use crate::ui::console_sink::ConsoleEventSink;
use crate::ui::context::UiContext;

/// How a command finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub exit_code: i32,
    /// Machine-readable outcome for the JSON `complete` event
    pub outcome: &'static str,
}

impl Completion {
    pub fn success() -> Self {
        Self {
            exit_code: 0,
            outcome: "success",
        }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Event sink matching the output mode
pub(crate) fn event_sink(
    command: &'static str,
    ui: &UiContext,
    dry_run: bool,
) -> Box<dyn SiteEventSink> {
    if ui.json {
        Box::new(JsonEventSink::stdout(command))
    } else {
        Box::new(ConsoleEventSink::new(ui.color, ui.unicode, ui.verbose, dry_run))
    }
}

/// Child stdout must not mix with NDJSON on our stdout
pub(crate) fn child_stdio(ui: &UiContext) -> StdioMode {
    if ui.json {
        StdioMode::StdoutToStderr
    } else {
        StdioMode::Inherit
    }
}
