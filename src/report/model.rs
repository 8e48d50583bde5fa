//! Report model and (de)serialization.

use crate::diff::{ChangeEntry, ChangeKind, changed_files};
use crate::error::{DiffReportError, Result};
use crate::source::CommitPair;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Ordered change entries between two trees, tagged with both tree ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Identifier of the old tree.
    pub old_commit: String,
    /// Identifier of the new tree.
    pub new_commit: String,
    /// When the report was assembled.
    pub generated_at: DateTime<Utc>,
    /// Entries in diff order.
    #[serde(default)]
    pub entries: Vec<ChangeEntry>,
}

impl Report {
    /// Create a report stamped with the current time.
    pub fn new(commits: CommitPair, entries: Vec<ChangeEntry>) -> Self {
        Self {
            old_commit: commits.old_commit,
            new_commit: commits.new_commit,
            generated_at: Utc::now(),
            entries,
        }
    }

    /// The pair of tree identifiers this report was built from.
    pub fn commits(&self) -> CommitPair {
        CommitPair::new(self.old_commit.clone(), self.new_commit.clone())
    }

    /// Returns true if both identifiers equal those in `commits`.
    ///
    /// This is the only freshness criterion: a report for the same two
    /// commits is still valid, anything else needs regenerating.
    pub fn matches_commits(&self, commits: &CommitPair) -> bool {
        self.old_commit == commits.old_commit && self.new_commit == commits.new_commit
    }

    /// Counts per change kind and file.
    pub fn summary(&self) -> ReportSummary {
        let mut summary = ReportSummary {
            files: changed_files(&self.entries).len(),
            ..ReportSummary::default()
        };

        for entry in &self.entries {
            match entry.kind() {
                Some(ChangeKind::Addition) => summary.additions += 1,
                Some(ChangeKind::Removal) => summary.removals += 1,
                Some(ChangeKind::Replace) => summary.replacements += 1,
                None => {}
            }
            summary.added_lines += entry.added_line_count();
            summary.removed_lines += entry.removed_line_count();
        }

        summary
    }

    /// Parse a report from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| DiffReportError::ReportError(format!("failed to parse report JSON: {}", e)))
    }

    /// Serialize the report to JSON.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let result = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        result.map_err(|e| DiffReportError::ReportError(format!("failed to serialize report: {}", e)))
    }

    /// Load a report from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            DiffReportError::ReportError(format!(
                "failed to read report '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json(&content)
    }
}

/// Aggregate counts over a report's entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub files: usize,
    pub additions: usize,
    pub removals: usize,
    pub replacements: usize,
    pub added_lines: usize,
    pub removed_lines: usize,
}

impl std::fmt::Display for ReportSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} file(s): {} addition(s), {} removal(s), {} replacement(s) (+{} -{} lines)",
            self.files,
            self.additions,
            self.removals,
            self.replacements,
            self.added_lines,
            self.removed_lines
        )
    }
}
