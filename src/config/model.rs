//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for diff-report.
///
/// This struct represents the contents of `.diff-report.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Diff source settings
    // =========================================================================
    /// Unchanged lines of context around each hunk (`git diff -U<n>`).
    #[serde(default = "default_context_lines")]
    pub context_lines: u32,

    /// Diff algorithm used by git.
    #[serde(default)]
    pub diff_algorithm: DiffAlgorithm,

    /// Ignore whitespace when comparing lines (`git diff -w`).
    #[serde(default)]
    pub ignore_whitespace: bool,

    // =========================================================================
    // Report settings
    // =========================================================================
    /// Glob patterns; entries whose file path matches any of them are dropped.
    #[serde(default)]
    pub exclude_paths: Vec<String>,

    /// Pretty-print JSON output.
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            context_lines: default_context_lines(),
            diff_algorithm: DiffAlgorithm::default(),
            ignore_whitespace: false,
            exclude_paths: Vec::new(),
            pretty: default_true(),
        }
    }
}
