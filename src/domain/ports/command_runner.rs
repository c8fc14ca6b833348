//! CommandRunner port - synchronous external process execution
//!
//! The restore use case drives the build and deploy tools through this
//! trait so tests can substitute a fake that never spawns anything.

use thiserror::Error;

use crate::domain::value_objects::CommandLine;

/// Where a child process writes its standard output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StdioMode {
    /// Child shares our stdin/stdout/stderr
    #[default]
    Inherit,
    /// Child stdout is sent to our stderr (keeps our stdout clean for NDJSON)
    StdoutToStderr,
}

/// Failure of an external command
#[derive(Debug, Error)]
pub enum ExternalProcessError {
    /// The program could not be started at all
    #[error("failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The program ran and reported failure
    #[error("`{command}` {}", exit_description(.code))]
    ExitStatus { command: String, code: Option<i32> },
}

impl ExternalProcessError {
    /// Exit code of the child, when it produced one
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::ExitStatus { code, .. } => *code,
            Self::Spawn { .. } => None,
        }
    }
}

fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with status {code}"),
        None => "was terminated by a signal".to_string(),
    }
}

/// Runs a command to completion
pub trait CommandRunner {
    /// Run `command`, blocking until it exits.
    ///
    /// Returns `Ok` only when the child exits with status zero.
    fn run(&self, command: &CommandLine, stdio: StdioMode) -> Result<(), ExternalProcessError>;

    /// Whether `program` looks runnable (used by dry runs)
    fn is_available(&self, _program: &str) -> bool {
        true
    }
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, command: &CommandLine, stdio: StdioMode) -> Result<(), ExternalProcessError> {
        (**self).run(command, stdio)
    }

    fn is_available(&self, program: &str) -> bool {
        (**self).is_available(program)
    }
}
