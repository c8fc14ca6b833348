//! sitemode - maintenance-page toggle for static hosting deployments
//!
//! Two operator-driven operations over a publish directory:
//!
//! - **maintenance**: copy a static maintenance page and icon over the
//!   published site (optionally deploying it)
//! - **restore**: run the application's build command, then its deploy
//!   command, reporting which step failed
//!
//! A read-only **status** probe tells the two states apart by content hash.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    MaintenanceOptions, MaintenanceResult, MaintenanceUseCase, RestoreOptions, RestoreOutcome,
    RestoreUseCase, StatusReport, StatusUseCase,
};
pub use config::{Config, SiteConfig};
pub use domain::ports::{CommandRunner, ExternalProcessError, FileSystem, StdioMode};
pub use domain::value_objects::{CommandLine, ContentHash, SiteMode, Step};
pub use error::{SiteModeError, SiteModeResult};
