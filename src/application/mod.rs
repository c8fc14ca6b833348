//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (value objects, ports)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `MaintenanceUseCase` - Copy the maintenance bundle into the publish directory
//! - `RestoreUseCase` - Rebuild and redeploy the live application
//! - `StatusUseCase` - Infer which mode the publish directory is in

pub mod maintenance;
pub mod restore;
pub mod status;

#[cfg(test)]
pub(crate) mod testing;

pub use maintenance::{
    DeployStatus, MaintenanceOptions, MaintenanceResult, MaintenanceUseCase, PublishedFile,
};
pub use restore::{
    RestoreOptions, RestoreOutcome, RestoreUseCase, EXIT_BUILD_FAILED, EXIT_DEPLOY_FAILED,
    EXIT_SUCCESS,
};
pub use status::{StatusReport, StatusUseCase};
