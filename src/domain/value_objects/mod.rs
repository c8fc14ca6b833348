//! Domain Value Objects
//!
//! Immutable types that carry meaning but no identity.

mod command_line;
mod config_warning;
mod hash;
mod site_mode;
mod step;

pub use command_line::{CommandLine, EmptyCommand};
pub use config_warning::ConfigWarning;
pub use hash::ContentHash;
pub use site_mode::SiteMode;
pub use step::Step;
