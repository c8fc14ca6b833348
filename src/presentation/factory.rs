//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::{MaintenanceUseCase, RestoreUseCase, StatusUseCase};
use crate::config::SiteConfig;
use crate::infrastructure::{LocalFs, SystemRunner};

/// Type alias for the concrete MaintenanceUseCase with all dependencies
pub type ConcreteMaintenanceUseCase = MaintenanceUseCase<LocalFs, SystemRunner>;

/// Type alias for the concrete RestoreUseCase
pub type ConcreteRestoreUseCase = RestoreUseCase<SystemRunner>;

/// Type alias for the concrete StatusUseCase
pub type ConcreteStatusUseCase = StatusUseCase<LocalFs>;

/// Create a maintenance use case; commands run in the project root
pub fn create_maintenance_use_case(site: &SiteConfig) -> ConcreteMaintenanceUseCase {
    MaintenanceUseCase::new(LocalFs::new(), SystemRunner::new(&site.project_root))
}

/// Create a restore use case; commands run in the project root
pub fn create_restore_use_case(site: &SiteConfig) -> ConcreteRestoreUseCase {
    RestoreUseCase::new(SystemRunner::new(&site.project_root))
}

/// Create a status use case
pub fn create_status_use_case() -> ConcreteStatusUseCase {
    StatusUseCase::new(LocalFs::new())
}
