//! Configuration module for sitemode
//!
//! Resolution order:
//! 1. CLI flags (`--project`, `--config`)
//! 2. Environment variables (SITEMODE_*)
//! 3. Project config (`sitemode.toml`)
//! 4. User config (`<config_dir>/sitemode/config.toml`)
//! 5. Built-in defaults (`web/` bundle, `build/web` publish dir, flutter + firebase)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{
    discover, load_with_warnings, user_config_path, with_env_overrides, LoadedConfig,
    ENV_BUILD_COMMAND, ENV_DEPLOY_COMMAND, ENV_PUBLISH_DIR,
};
pub use types::{
    BundleConfig, CommandsConfig, Config, PublishConfig, SiteConfig, PROJECT_CONFIG_FILE,
};
