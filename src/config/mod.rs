//! Configuration model for diff-report.
//!
//! This module defines the Config struct that represents `.diff-report.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for optional fields, and validation of config values.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use types::{CONFIG_FILE_NAME, DiffAlgorithm};
