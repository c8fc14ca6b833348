//! Status Use Case
//!
//! Reports which mode the publish directory appears to be in. Nothing on
//! disk records the mode, so it is inferred by hashing the published
//! default document and the maintenance document.

use std::path::PathBuf;

use crate::config::SiteConfig;
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::{ContentHash, SiteMode};
use crate::error::SiteModeResult;

/// Snapshot of the publish directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub mode: SiteMode,
    pub publish_dir: PathBuf,
    /// File name of the published default document
    pub index_name: String,
    /// Hash of the published default document, if present
    pub index_hash: Option<ContentHash>,
    /// Hash of the maintenance document, if present
    pub maintenance_hash: Option<ContentHash>,
    /// Bundle files that do not exist
    pub missing_sources: Vec<PathBuf>,
}

impl StatusReport {
    /// Whether `sitemode maintenance` would currently succeed
    pub fn bundle_complete(&self) -> bool {
        self.missing_sources.is_empty()
    }
}

/// Status use case - read-only inspection
pub struct StatusUseCase<FS>
where
    FS: FileSystem,
{
    fs: FS,
}

impl<FS> StatusUseCase<FS>
where
    FS: FileSystem,
{
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    pub fn execute(&self, site: &SiteConfig) -> SiteModeResult<StatusReport> {
        let document = site.document_path();
        let icon = site.icon_path();
        let index = site.published_index();

        let missing_sources: Vec<PathBuf> = [&document, &icon]
            .into_iter()
            .filter(|p| !self.fs.exists(p))
            .cloned()
            .collect();

        let maintenance_hash = self.hash_if_exists(&document)?;
        let index_hash = self.hash_if_exists(&index)?;

        let mode = match (&index_hash, &maintenance_hash) {
            (None, _) => SiteMode::Unpublished,
            (Some(_), None) => SiteMode::Unknown,
            (Some(published), Some(maintenance)) if published == maintenance => {
                SiteMode::Maintenance
            }
            (Some(_), Some(_)) => SiteMode::Live,
        };

        Ok(StatusReport {
            mode,
            publish_dir: site.publish_dir(),
            index_name: site.config.publish.index_name.clone(),
            index_hash,
            maintenance_hash,
            missing_sources,
        })
    }

    fn hash_if_exists(&self, path: &std::path::Path) -> SiteModeResult<Option<ContentHash>> {
        if !self.fs.exists(path) {
            return Ok(None);
        }
        Ok(Some(self.fs.hash(path)?))
    }
}
