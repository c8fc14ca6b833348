//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::CommandLine;
use crate::error::SiteModeResult;

use super::loader::{self, ConfigWarning};

/// File name of the project-level config
pub const PROJECT_CONFIG_FILE: &str = "sitemode.toml";

/// Location of the maintenance bundle (read-only input)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleConfig {
    #[serde(default = "default_document")]
    pub document: PathBuf,

    #[serde(default = "default_icon")]
    pub icon: PathBuf,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            document: default_document(),
            icon: default_icon(),
        }
    }
}

fn default_document() -> PathBuf {
    PathBuf::from("web").join("maintenance.html")
}

fn default_icon() -> PathBuf {
    PathBuf::from("web").join("favicon.png")
}

/// The directory the hosting provider serves, and the names it expects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishConfig {
    #[serde(default = "default_publish_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_index_name")]
    pub index_name: String,

    #[serde(default = "default_icon_name")]
    pub icon_name: String,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            dir: default_publish_dir(),
            index_name: default_index_name(),
            icon_name: default_icon_name(),
        }
    }
}

fn default_publish_dir() -> PathBuf {
    PathBuf::from("build").join("web")
}

fn default_index_name() -> String {
    "index.html".to_string()
}

fn default_icon_name() -> String {
    "favicon.png".to_string()
}

/// External build and deploy commands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandsConfig {
    #[serde(default = "default_build_command")]
    pub build: CommandLine,

    #[serde(default = "default_deploy_command")]
    pub deploy: CommandLine,
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            build: default_build_command(),
            deploy: default_deploy_command(),
        }
    }
}

fn default_build_command() -> CommandLine {
    CommandLine::from_static("flutter", &["build", "web"])
}

fn default_deploy_command() -> CommandLine {
    CommandLine::from_static("firebase", &["deploy", "--only", "hosting"])
}

/// Main configuration structure (`sitemode.toml`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub bundle: BundleConfig,

    #[serde(default)]
    pub publish: PublishConfig,

    #[serde(default)]
    pub commands: CommandsConfig,
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: &Path) -> SiteModeResult<Self> {
        Self::load_with_warnings(path).map(|(config, _warnings)| config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> SiteModeResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }
}

/// Configuration bound to a project root.
///
/// Every operation takes one of these instead of reading globals; relative
/// paths in [`Config`] resolve against `project_root`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub project_root: PathBuf,
    pub config: Config,
}

impl SiteConfig {
    pub fn new(project_root: impl Into<PathBuf>, config: Config) -> Self {
        Self {
            project_root: project_root.into(),
            config,
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_root.join(path)
        }
    }

    /// Source maintenance document
    pub fn document_path(&self) -> PathBuf {
        self.resolve(&self.config.bundle.document)
    }

    /// Source icon
    pub fn icon_path(&self) -> PathBuf {
        self.resolve(&self.config.bundle.icon)
    }

    /// Publish directory
    pub fn publish_dir(&self) -> PathBuf {
        self.resolve(&self.config.publish.dir)
    }

    /// Default document inside the publish directory
    pub fn published_index(&self) -> PathBuf {
        self.publish_dir().join(&self.config.publish.index_name)
    }

    /// Icon inside the publish directory
    pub fn published_icon(&self) -> PathBuf {
        self.publish_dir().join(&self.config.publish.icon_name)
    }

    pub fn build_command(&self) -> &CommandLine {
        &self.config.commands.build
    }

    pub fn deploy_command(&self) -> &CommandLine {
        &self.config.commands.deploy
    }
}
