//! Maintenance Options

use crate::domain::ports::StdioMode;

/// Options for the maintenance use case
#[derive(Debug, Clone, Default)]
pub struct MaintenanceOptions {
    /// Validate sources and report the plan without writing anything
    pub dry_run: bool,
    /// Run the deploy command after the bundle is in place
    pub deploy: bool,
    /// Where the deploy command's stdout goes
    pub stdio: StdioMode,
}

impl MaintenanceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_deploy(mut self, deploy: bool) -> Self {
        self.deploy = deploy;
        self
    }

    pub fn with_stdio(mut self, stdio: StdioMode) -> Self {
        self.stdio = stdio;
        self
    }
}
