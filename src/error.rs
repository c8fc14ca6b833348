//! Error types for sitemode
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::FsError;

/// Result type alias for sitemode operations
pub type SiteModeResult<T> = Result<T, SiteModeError>;

/// Main error type for sitemode operations
#[derive(Error, Debug)]
pub enum SiteModeError {
    /// A file of the maintenance bundle does not exist
    #[error("maintenance bundle file not found: {}", .path.display())]
    SourceMissing { path: PathBuf },

    /// Filesystem failure while preparing the publish directory
    #[error(transparent)]
    Fs(#[from] FsError),

    /// Config file could not be parsed
    #[error("invalid config in {}: {message}", .file.display())]
    Config { file: PathBuf, message: String },

    /// Build or deploy command line is unusable
    #[error("invalid {key} command: {reason}")]
    InvalidCommand { key: String, reason: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
