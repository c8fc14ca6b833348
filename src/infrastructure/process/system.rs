//! System Command Runner
//!
//! Spawns build and deploy tools with `std::process::Command` and waits for
//! them. There is no timeout; a hung tool is interrupted by the operator.

use std::process::{Command, Stdio};

use crate::domain::ports::{CommandRunner, ExternalProcessError, StdioMode};
use crate::domain::value_objects::CommandLine;

/// Runs commands on the host, in the project root
#[derive(Debug, Clone)]
pub struct SystemRunner {
    working_dir: std::path::PathBuf,
}

impl SystemRunner {
    pub fn new(working_dir: impl Into<std::path::PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
        }
    }

    /// Check whether `program` resolves to a file, either directly or on `PATH`
    pub fn check_available(program: &str) -> bool {
        let direct = std::path::Path::new(program);
        if direct.components().count() > 1 {
            return direct.is_file();
        }

        let Some(paths) = std::env::var_os("PATH") else {
            return false;
        };
        std::env::split_paths(&paths).any(|dir| {
            EXECUTABLE_SUFFIXES
                .iter()
                .any(|suffix| dir.join(format!("{program}{suffix}")).is_file())
        })
    }
}

#[cfg(windows)]
const EXECUTABLE_SUFFIXES: &[&str] = &["", ".exe", ".cmd", ".bat"];
#[cfg(not(windows))]
const EXECUTABLE_SUFFIXES: &[&str] = &[""];

impl CommandRunner for SystemRunner {
    fn run(&self, command: &CommandLine, stdio: StdioMode) -> Result<(), ExternalProcessError> {
        let mut cmd = Command::new(command.program());
        cmd.args(command.args())
            .current_dir(&self.working_dir)
            .stdin(Stdio::inherit()); // deploy tools may prompt for login

        match stdio {
            StdioMode::Inherit => {
                cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
            }
            StdioMode::StdoutToStderr => {
                cmd.stdout(Stdio::from(std::io::stderr()))
                    .stderr(Stdio::inherit());
            }
        }

        let status = cmd.status().map_err(|e| ExternalProcessError::Spawn {
            program: command.program().to_string(),
            source: e,
        })?;

        if !status.success() {
            return Err(ExternalProcessError::ExitStatus {
                command: command.to_string(),
                code: status.code(),
            });
        }

        Ok(())
    }

    fn is_available(&self, program: &str) -> bool {
        let path = std::path::Path::new(program);
        if path.is_relative() && path.components().count() > 1 {
            return self.working_dir.join(path).is_file();
        }
        Self::check_available(program)
    }
}
