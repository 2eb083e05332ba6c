//! Fixtures for synthesizing report bundles in tests.
//!
//! Provides utilities to:
//! - Build report/test/result model values with sensible defaults
//! - Write a complete host document with an embedded zip container
//! - Write nested trace archives and attachment files on disk

pub mod fixtures;
pub mod model;

pub use fixtures::{BundleBuilder, write_trace_archive};
pub use model::*;
