//! Helper functions for diff parsing.

use regex::Regex;
use std::sync::LazyLock;

/// Path git prints for the missing side of a created or deleted file.
const NULL_DEVICE: &str = "/dev/null";

/// Hunk header: "@@ -old_start[,old_count] +new_start[,new_count] @@" plus optional trailing text.
/// Counts may be omitted, as git does for one-line ranges.
static HUNK_HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@@ -(\d+)(?:,(\d+))? \+(\d+)(?:,(\d+))? @@").expect("Invalid hunk header regex")
});

/// Line ranges announced by a hunk header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct HunkHeader {
    /// First old-file line covered by the hunk (1-based, 0 for an empty range).
    pub old_start: usize,
    /// Number of old-file lines in the hunk.
    pub old_count: usize,
    /// First new-file line covered by the hunk (1-based, 0 for an empty range).
    pub new_start: usize,
    /// Number of new-file lines in the hunk.
    pub new_count: usize,
}

/// Parse a hunk header line.
///
/// Format: "@@ -old_start,old_len +new_start,new_len @@" or "@@ -old_start +new_start @@"
/// Also handles: "@@ -old_start,old_len +new_start,new_len @@ context info"
///
/// An omitted length defaults to 1, as in git's output. Returns `None` when the
/// line is not a header, a number does not fit in `usize`, or a range runs
/// past `usize::MAX`.
pub(super) fn parse_hunk_header(line: &str) -> Option<HunkHeader> {
    let caps = HUNK_HEADER_REGEX.captures(line)?;

    let number = |index: usize| -> Option<usize> {
        match caps.get(index) {
            Some(m) => m.as_str().parse().ok(),
            None => Some(1),
        }
    };

    let header = HunkHeader {
        old_start: number(1)?,
        old_count: number(2)?,
        new_start: number(3)?,
        new_count: number(4)?,
    };

    header.old_start.checked_add(header.old_count)?;
    header.new_start.checked_add(header.new_count)?;
    Some(header)
}

/// Returns true if `line` is a well-formed hunk header.
pub(super) fn is_hunk_header(line: &str) -> bool {
    parse_hunk_header(line).is_some()
}

/// Resolve the file path from a "--- " / "+++ " header pair.
///
/// Uses the new path unless it is the null device (file deleted), in which
/// case the old path is used. A leading `a/` or `b/` is stripped; any other
/// path is kept as-is. Returns `None` if the lines are not such a pair.
pub(super) fn resolve_file_path(old_header: &str, new_header: &str) -> Option<String> {
    let old_path = header_path(old_header.strip_prefix("--- ")?);
    let new_path = header_path(new_header.strip_prefix("+++ ")?);

    let path = if new_path == NULL_DEVICE {
        old_path
    } else {
        new_path
    };

    let path = path
        .strip_prefix("a/")
        .or_else(|| path.strip_prefix("b/"))
        .unwrap_or(path);

    Some(normalize_path(path))
}

/// Drop a trailing tab-separated timestamp, as written by `diff -u`, and a
/// carriage return left by CRLF diff text.
fn header_path(rest: &str) -> &str {
    let rest = rest.strip_suffix('\r').unwrap_or(rest);
    match rest.split_once('\t') {
        Some((path, _)) => path,
        None => rest,
    }
}

/// Normalize a file path to use forward slashes.
pub(super) fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}
