//! Maintenance result types

use std::path::PathBuf;

use crate::domain::ports::ExternalProcessError;
use crate::domain::value_objects::ContentHash;

/// A bundle file copied into the publish directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedFile {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub hash: ContentHash,
    pub bytes: usize,
}

/// What happened to the optional deploy step
#[derive(Debug, Default)]
pub enum DeployStatus {
    /// `--deploy` was not given
    #[default]
    NotRequested,
    /// Dry run: deploy would have run
    Planned,
    /// Deploy command exited zero
    Deployed,
    /// Deploy command failed; the bundle is in place but not live
    Failed(ExternalProcessError),
}

/// Result of enabling maintenance mode
#[derive(Debug)]
pub struct MaintenanceResult {
    /// Publish directory that now serves the maintenance bundle
    pub publish_dir: PathBuf,
    /// Whether the publish directory had to be created
    pub created_dir: bool,
    /// Files written (or that would be written in a dry run)
    pub files: Vec<PublishedFile>,
    pub dry_run: bool,
    pub deploy: DeployStatus,
}

impl MaintenanceResult {
    pub fn new(publish_dir: PathBuf, dry_run: bool) -> Self {
        Self {
            publish_dir,
            created_dir: false,
            files: Vec::new(),
            dry_run,
            deploy: DeployStatus::NotRequested,
        }
    }

    /// Files are in place and any requested deploy succeeded
    pub fn is_success(&self) -> bool {
        !matches!(self.deploy, DeployStatus::Failed(_))
    }
}
