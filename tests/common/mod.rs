//! Common test utilities for sitemode CLI tests.
//!
//! - `TestEnv`: temp project and home directories plus CLI runners
//! - Fixtures: maintenance bundle contents and config snippets

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
