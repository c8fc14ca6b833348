//! Command Line Value Object
//!
//! An external command as program plus arguments. Config files may give it
//! either as a single string (split on whitespace) or as an argv array:
//!
//! ```toml
//! [commands]
//! build = "flutter build web"
//! deploy = ["firebase", "deploy", "--only", "hosting"]
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A non-empty argv
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "Vec<String>")]
pub struct CommandLine {
    program: String,
    args: Vec<String>,
}

/// Reason a command line was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyCommand;

impl fmt::Display for EmptyCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "command is empty")
    }
}

impl std::error::Error for EmptyCommand {}

impl CommandLine {
    /// Build from an argv vector; the first element is the program
    pub fn from_argv<I, S>(argv: I) -> Result<Self, EmptyCommand>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut iter = argv.into_iter().map(Into::into);
        let program = iter.next().filter(|p| !p.trim().is_empty()).ok_or(EmptyCommand)?;
        Ok(Self {
            program,
            args: iter.collect(),
        })
    }

    /// Built-in defaults; `program` is a non-empty literal
    pub(crate) fn from_static(program: &'static str, args: &[&'static str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Split a shell-like string on whitespace (no quoting support)
    pub fn parse(s: &str) -> Result<Self, EmptyCommand> {
        Self::from_argv(s.split_whitespace())
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Full argv including the program
    pub fn argv(&self) -> Vec<&str> {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect()
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.argv().join(" "))
    }
}

impl From<CommandLine> for Vec<String> {
    fn from(cmd: CommandLine) -> Self {
        std::iter::once(cmd.program).chain(cmd.args).collect()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CommandLineDe {
    Line(String),
    Argv(Vec<String>),
}

impl<'de> Deserialize<'de> for CommandLine {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let parsed = match CommandLineDe::deserialize(deserializer)? {
            CommandLineDe::Line(line) => CommandLine::parse(&line),
            CommandLineDe::Argv(argv) => CommandLine::from_argv(argv),
        };
        parsed.map_err(serde::de::Error::custom)
    }
}
