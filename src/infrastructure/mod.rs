//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local)
//! - `process/` - External command execution (System)
//! - `events/` - Event sinks (JSON)

pub mod events;
pub mod fs;
pub mod process;

// Re-export for convenience
pub use events::JsonEventSink;
pub use fs::LocalFs;
pub use process::SystemRunner;
