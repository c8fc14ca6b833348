//! External pipeline steps.

use std::fmt;

use serde::Serialize;

/// One of the two external commands sitemode drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    /// Rebuild the application into the publish directory
    Build,
    /// Push the publish directory to the hosting endpoint
    Deploy,
}

impl Step {
    pub fn as_str(&self) -> &'static str {
        match self {
            Step::Build => "build",
            Step::Deploy => "deploy",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
