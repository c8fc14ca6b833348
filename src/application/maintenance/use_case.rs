//! Maintenance Use Case
//!
//! Copies the maintenance document and icon into the publish directory.
//!
//! Both sources are read before the publish directory is touched, so a
//! missing or unreadable bundle file leaves it exactly as it was. Each
//! destination is then replaced atomically, document first. A failure while
//! replacing the icon leaves the new document in place; there is no rollback.

use std::path::PathBuf;

use crate::config::SiteConfig;
use crate::domain::ports::{CommandRunner, FileSystem, SiteEvent, SiteEventSink};
use crate::domain::value_objects::{ContentHash, Step};
use crate::error::{SiteModeError, SiteModeResult};

use super::options::MaintenanceOptions;
use super::result::{DeployStatus, MaintenanceResult, PublishedFile};

/// Source read into memory, waiting to be written
struct StagedCopy {
    source: PathBuf,
    destination: PathBuf,
    content: Vec<u8>,
}

/// Maintenance use case - swaps the published site for the maintenance page
pub struct MaintenanceUseCase<FS, CR>
where
    FS: FileSystem,
    CR: CommandRunner,
{
    fs: FS,
    runner: CR,
}

impl<FS, CR> MaintenanceUseCase<FS, CR>
where
    FS: FileSystem,
    CR: CommandRunner,
{
    /// Create a new maintenance use case
    pub fn new(fs: FS, runner: CR) -> Self {
        Self { fs, runner }
    }

    /// Enable maintenance mode.
    ///
    /// Filesystem failures propagate. A failed deploy does not: it is
    /// reported through [`DeployStatus::Failed`] because the files are
    /// already in place at that point.
    pub fn execute(
        &self,
        site: &SiteConfig,
        options: &MaintenanceOptions,
        events: &dyn SiteEventSink,
    ) -> SiteModeResult<MaintenanceResult> {
        let staged = self.stage(site)?;

        let publish_dir = site.publish_dir();
        let mut result = MaintenanceResult::new(publish_dir.clone(), options.dry_run);
        result.created_dir = !self.fs.exists(&publish_dir);

        if !options.dry_run {
            self.fs.create_dir_all(&publish_dir)?;
        }
        events.on_event(SiteEvent::PublishDirReady {
            path: publish_dir,
            created: result.created_dir,
        });

        for copy in staged {
            let hash = ContentHash::from_bytes(&copy.content);
            if !options.dry_run {
                self.fs.write(&copy.destination, &copy.content)?;
            }
            events.on_event(SiteEvent::FilePublished {
                source: copy.source.clone(),
                destination: copy.destination.clone(),
                hash: hash.clone(),
            });
            result.files.push(PublishedFile {
                source: copy.source,
                destination: copy.destination,
                hash,
                bytes: copy.content.len(),
            });
        }

        if options.deploy {
            result.deploy = self.deploy(site, options, events);
        }

        Ok(result)
    }

    /// Read every bundle file, failing before any write happens
    fn stage(&self, site: &SiteConfig) -> SiteModeResult<Vec<StagedCopy>> {
        let plan = [
            (site.document_path(), site.published_index()),
            (site.icon_path(), site.published_icon()),
        ];

        plan.into_iter()
            .map(|(source, destination)| {
                if !self.fs.exists(&source) {
                    return Err(SiteModeError::SourceMissing { path: source });
                }
                let content = self.fs.read(&source)?;
                Ok(StagedCopy {
                    source,
                    destination,
                    content,
                })
            })
            .collect()
    }

    fn deploy(
        &self,
        site: &SiteConfig,
        options: &MaintenanceOptions,
        events: &dyn SiteEventSink,
    ) -> DeployStatus {
        let command = site.deploy_command().clone();

        if options.dry_run {
            events.on_event(SiteEvent::CommandPlanned {
                step: Step::Deploy,
                available: self.runner.is_available(command.program()),
                command,
            });
            return DeployStatus::Planned;
        }

        events.on_event(SiteEvent::CommandStarted {
            step: Step::Deploy,
            command: command.clone(),
        });
        match self.runner.run(&command, options.stdio) {
            Ok(()) => {
                events.on_event(SiteEvent::CommandSucceeded { step: Step::Deploy });
                DeployStatus::Deployed
            }
            Err(error) => {
                events.on_event(SiteEvent::CommandFailed {
                    step: Step::Deploy,
                    error: error.to_string(),
                });
                DeployStatus::Failed(error)
            }
        }
    }
}
