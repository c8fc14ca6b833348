//! Restore outcome

use crate::domain::ports::ExternalProcessError;
use crate::domain::value_objects::{CommandLine, Step};

/// Process exit status for a successful run
pub const EXIT_SUCCESS: i32 = 0;
/// Process exit status when the build command fails
pub const EXIT_BUILD_FAILED: i32 = 3;
/// Process exit status when the deploy command fails
pub const EXIT_DEPLOY_FAILED: i32 = 4;

/// How a restore ended
#[derive(Debug)]
pub enum RestoreOutcome {
    /// Both commands exited zero (or a dry run finished)
    Success,
    /// Build failed; deploy was not attempted
    BuildFailed {
        command: CommandLine,
        error: ExternalProcessError,
    },
    /// Build succeeded but deploy failed; the publish directory holds the
    /// new build while the endpoint may still serve the maintenance page
    DeployFailed {
        command: CommandLine,
        error: ExternalProcessError,
    },
}

impl RestoreOutcome {
    pub(crate) fn failed(step: Step, command: CommandLine, error: ExternalProcessError) -> Self {
        match step {
            Step::Build => Self::BuildFailed { command, error },
            Step::Deploy => Self::DeployFailed { command, error },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Step that failed, if any
    pub fn failed_step(&self) -> Option<Step> {
        match self {
            Self::Success => None,
            Self::BuildFailed { .. } => Some(Step::Build),
            Self::DeployFailed { .. } => Some(Step::Deploy),
        }
    }

    pub fn error(&self) -> Option<&ExternalProcessError> {
        match self {
            Self::Success => None,
            Self::BuildFailed { error, .. } | Self::DeployFailed { error, .. } => Some(error),
        }
    }

    /// Machine-readable name, used in JSON output
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::BuildFailed { .. } => "build_failed",
            Self::DeployFailed { .. } => "deploy_failed",
        }
    }

    /// Process exit status for this outcome
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Success => EXIT_SUCCESS,
            Self::BuildFailed { .. } => EXIT_BUILD_FAILED,
            Self::DeployFailed { .. } => EXIT_DEPLOY_FAILED,
        }
    }
}
