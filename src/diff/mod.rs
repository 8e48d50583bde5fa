//! Unified diff parsing for diff-report.
//!
//! Turns raw `git diff` style text into an ordered list of change entries.
//! Each entry is a contiguous block of removed and/or added lines with its
//! file path and 1-based start lines in the old and new file.
//!
//! The parsing is deterministic and supports:
//! - Multiple files and multiple hunks per file
//! - New files (`--- /dev/null`) and deleted files (`+++ /dev/null`)
//! - Hunk headers with trailing function context, and with omitted counts
//! - `\ No newline at end of file` markers
//!
//! Extraction never fails; unrecognized lines end the current hunk.

mod entry;
mod helpers;
mod parser;


// Re-export public API
pub use entry::{ChangeEntry, ChangeKind, changed_files};
pub use parser::{DiffEntryExtractor, extract_entries};
