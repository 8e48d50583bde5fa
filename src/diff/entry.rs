//! Change entry types produced by the extractor.

use serde::{Deserialize, Serialize};

/// The shape of a non-empty change entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    /// Lines were added; nothing was removed.
    Addition,
    /// Lines were removed; nothing was added.
    Removal,
    /// A run of removed lines immediately followed by added lines.
    Replace,
}

impl std::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChangeKind::Addition => write!(f, "addition"),
            ChangeKind::Removal => write!(f, "removal"),
            ChangeKind::Replace => write!(f, "replace"),
        }
    }
}

/// A contiguous block of removed and/or added lines in a single file.
///
/// `previous_code`/`previous_line` are either both present or both absent,
/// and the same holds for `code`/`line`. Line numbers are 1-based and refer
/// to the old and new file respectively. Code blocks are newline-joined and
/// never end with a newline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeEntry {
    /// Repository-relative file path (forward slashes, no `a/`/`b/` prefix).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,

    /// Removed lines, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_code: Option<String>,

    /// Old-file line where `previous_code` begins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_line: Option<usize>,

    /// Added lines, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// New-file line where `code` begins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl ChangeEntry {
    /// Create an entry that only adds lines.
    pub fn addition(file_path: impl Into<String>, code: impl Into<String>, line: usize) -> Self {
        Self {
            file_path: Some(file_path.into()),
            code: Some(code.into()),
            line: Some(line),
            ..Self::default()
        }
    }

    /// Create an entry that only removes lines.
    pub fn removal(
        file_path: impl Into<String>,
        previous_code: impl Into<String>,
        previous_line: usize,
    ) -> Self {
        Self {
            file_path: Some(file_path.into()),
            previous_code: Some(previous_code.into()),
            previous_line: Some(previous_line),
            ..Self::default()
        }
    }

    /// Create an entry that replaces removed lines with added ones.
    pub fn replace(
        file_path: impl Into<String>,
        previous_code: impl Into<String>,
        previous_line: usize,
        code: impl Into<String>,
        line: usize,
    ) -> Self {
        Self {
            file_path: Some(file_path.into()),
            previous_code: Some(previous_code.into()),
            previous_line: Some(previous_line),
            code: Some(code.into()),
            line: Some(line),
        }
    }

    /// Returns true if the entry carries neither removed nor added code.
    pub fn is_empty(&self) -> bool {
        self.code.is_none() && self.previous_code.is_none()
    }

    /// Classify the entry, or `None` for an empty one.
    pub fn kind(&self) -> Option<ChangeKind> {
        match (&self.previous_code, &self.code) {
            (Some(_), Some(_)) => Some(ChangeKind::Replace),
            (Some(_), None) => Some(ChangeKind::Removal),
            (None, Some(_)) => Some(ChangeKind::Addition),
            (None, None) => None,
        }
    }

    /// Number of removed lines.
    pub fn removed_line_count(&self) -> usize {
        self.previous_code.as_deref().map_or(0, count_lines)
    }

    /// Number of added lines.
    pub fn added_line_count(&self) -> usize {
        self.code.as_deref().map_or(0, count_lines)
    }
}

// A block of n lines holds n-1 separators; an empty block is still one line.
fn count_lines(block: &str) -> usize {
    block.matches('\n').count() + 1
}

/// Distinct file paths touched by `entries`, in first-seen order.
pub fn changed_files(entries: &[ChangeEntry]) -> Vec<String> {
    let mut files: Vec<String> = Vec::new();
    for path in entries.iter().filter_map(|e| e.file_path.as_deref()) {
        if !files.iter().any(|f| f == path) {
            files.push(path.to_string());
        }
    }
    files
}
