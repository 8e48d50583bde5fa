//! Configuration types and defaults for diff-report.
//!
//! This module defines enums, constants, and default value functions
//! used by the Config struct.

use serde::{Deserialize, Serialize};

/// File name looked up in the repository root when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = ".diff-report.yaml";

/// Upper bound for `context_lines`; larger values only bloat the diff.
pub const MAX_CONTEXT_LINES: u32 = 1000;

/// Diff algorithm passed to `git diff --diff-algorithm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DiffAlgorithm {
    /// Git's default algorithm.
    #[default]
    Myers,
    /// Myers, spending extra time to find the smallest diff.
    Minimal,
    /// Patience diff.
    Patience,
    /// Histogram diff.
    Histogram,
}

impl DiffAlgorithm {
    /// Name as git expects it.
    pub fn as_git_arg(&self) -> &'static str {
        match self {
            Self::Myers => "myers",
            Self::Minimal => "minimal",
            Self::Patience => "patience",
            Self::Histogram => "histogram",
        }
    }
}

pub(super) fn default_context_lines() -> u32 {
    3
}

pub(super) fn default_true() -> bool {
    true
}
