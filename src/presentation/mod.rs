//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Usage
//!
//! ```ignore
//! use sitemode::presentation::factory;
//!
//! let use_case = factory::create_restore_use_case(&site);
//! let outcome = use_case.execute(&site, &options, &NoopEventSink);
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen, Commands};
pub use factory::{create_maintenance_use_case, create_restore_use_case, create_status_use_case};
