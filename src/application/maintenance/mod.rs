//! Maintenance Use Case
//!
//! Puts the maintenance bundle into the publish directory, optionally
//! deploying it right away.

mod options;
mod result;
mod use_case;

#[cfg(test)]
mod tests;

pub use options::MaintenanceOptions;
pub use result::{DeployStatus, MaintenanceResult, PublishedFile};
pub use use_case::MaintenanceUseCase;
