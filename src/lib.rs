//! diff-report: extract ordered change entries from unified git diffs.
//!
//! The core is [`diff::extract_entries`], a total, line-oriented parser that
//! turns `git diff` output into [`diff::ChangeEntry`] values. [`report`]
//! stamps those entries with the commit pair they came from and reuses a
//! previous report when both commits are unchanged.

pub mod cli;
pub mod commands;
pub mod config;
pub mod diff;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod git;
pub mod report;
pub mod source;

#[cfg(test)]
mod test_support;
