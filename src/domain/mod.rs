//! Domain Layer
//!
//! Types and ports shared by the maintenance, restore and status use cases.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (CommandLine, ContentHash, SiteMode)
//! - `ports/` - Interface definitions for infrastructure (FileSystem, CommandRunner)
//!
//! This layer never touches the file system or spawns processes directly.

pub mod ports;
pub mod value_objects;
