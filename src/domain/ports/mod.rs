//! Domain Ports
//!
//! Interfaces the application layer depends on. Infrastructure provides
//! the concrete implementations.

pub mod command_runner;
pub mod file_system;
pub mod site_events;

pub use command_runner::{CommandRunner, ExternalProcessError, StdioMode};
pub use file_system::{FileSystem, FsError, FsResult};
pub use site_events::{NoopEventSink, SiteEvent, SiteEventSink};
