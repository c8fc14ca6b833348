//! Restore Options

use crate::domain::ports::StdioMode;

/// Options for the restore use case
#[derive(Debug, Clone, Default)]
pub struct RestoreOptions {
    /// Report the commands without running them
    pub dry_run: bool,
    /// Where the child processes' stdout goes
    pub stdio: StdioMode,
}

impl RestoreOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_stdio(mut self, stdio: StdioMode) -> Self {
        self.stdio = stdio;
        self
    }
}
