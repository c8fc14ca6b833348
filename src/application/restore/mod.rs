//! Restore Use Case
//!
//! Rebuilds the application and redeploys it, ending maintenance mode.

mod options;
mod outcome;
mod use_case;


pub use options::RestoreOptions;
pub use outcome::{RestoreOutcome, EXIT_BUILD_FAILED, EXIT_DEPLOY_FAILED, EXIT_SUCCESS};
pub use use_case::RestoreUseCase;
