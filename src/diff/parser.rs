//! Core diff parsing logic.
//!
//! The raw diff is scanned line by line. Each line is first classified
//! (`DiffLine`), then folded into a `Scan` that holds the parser state,
//! the entry being built, and the running old/new line counters.
//!
//! Flush points, in order of precedence:
//! - a hunk header always flushes the pending entry
//! - a context line flushes it
//! - a removal flushes it unless the previous content line was also a removal
//! - end of input flushes it
//!
//! Empty entries are never emitted. Malformed input is never an error: lines
//! that cannot belong to a hunk switch the parser to `OutsideHunk` until the
//! next hunk header.

use super::entry::ChangeEntry;
use super::helpers::{HunkHeader, is_hunk_header, parse_hunk_header, resolve_file_path};

/// Marker git prints after a line that lacks a trailing newline.
const NO_NEWLINE_MARKER: &str = "\\ No newline at end of file";

/// Whether code lines are currently being accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ParserState {
    /// Before the first hunk header, or after a line that ended the hunk.
    OutsideHunk,
    /// After a hunk header; `+`, `-` and ` ` lines are accepted.
    InHunk,
}

/// A single classified line of diff text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum DiffLine<'a> {
    /// `\ No newline at end of file`.
    NoNewlineMarker,
    /// A hunk header, plus the file path resolved from the two lines before it.
    HunkHeader {
        header: HunkHeader,
        file_path: Option<String>,
    },
    /// One half of a `--- ` / `+++ ` pair that directly precedes a hunk header.
    FileHeader,
    /// `+` line (content without the prefix).
    Added(&'a str),
    /// `-` line (content without the prefix).
    Removed(&'a str),
    /// ` ` line.
    Context,
    /// Anything else, including an empty line.
    Other,
}

/// Classify `lines[index]`, looking at its neighbours where headers need it.
///
/// Structural lines are recognized with or without a trailing `\r`; code
/// content keeps it.
pub(super) fn classify<'a>(lines: &[&'a str], index: usize) -> DiffLine<'a> {
    let line = lines[index];
    let previous = index.checked_sub(1).map(|i| lines[i]);

    if strip_cr(line) == NO_NEWLINE_MARKER {
        return DiffLine::NoNewlineMarker;
    }

    if let Some(header) = parse_hunk_header(line) {
        let file_path = match (index.checked_sub(2).map(|i| lines[i]), previous) {
            (Some(old_header), Some(new_header)) => resolve_file_path(old_header, new_header),
            _ => None,
        };
        return DiffLine::HunkHeader { header, file_path };
    }

    if is_file_header(lines, index) {
        return DiffLine::FileHeader;
    }

    match line.chars().next() {
        Some('+') => DiffLine::Added(&line[1..]),
        Some('-') => DiffLine::Removed(&line[1..]),
        Some(' ') => DiffLine::Context,
        _ => DiffLine::Other,
    }
}

fn strip_cr(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

/// Returns true if `lines[index]` is part of a `--- ` / `+++ ` pair that is
/// immediately followed by a hunk header.
fn is_file_header(lines: &[&str], index: usize) -> bool {
    let at = |i: usize| lines.get(i).copied().unwrap_or("");
    let line = at(index);

    if line.starts_with("--- ") {
        return at(index + 1).starts_with("+++ ") && is_hunk_header(at(index + 2));
    }

    if line.starts_with("+++ ") && index > 0 {
        return at(index - 1).starts_with("--- ") && is_hunk_header(at(index + 1));
    }

    false
}

/// A run of consecutive lines on one side of the diff.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Block<'a> {
    start: usize,
    lines: Vec<&'a str>,
}

impl<'a> Block<'a> {
    fn new(start: usize) -> Self {
        Self {
            start,
            lines: Vec::new(),
        }
    }

    /// Joined text without a trailing newline.
    fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// The entry currently being built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(super) struct PendingEntry<'a> {
    removed: Option<Block<'a>>,
    added: Option<Block<'a>>,
}

impl<'a> PendingEntry<'a> {
    fn is_empty(&self) -> bool {
        self.removed.is_none() && self.added.is_none()
    }

    fn push_removed(&mut self, content: &'a str, old_line: usize) {
        self.removed
            .get_or_insert_with(|| Block::new(old_line))
            .lines
            .push(content);
    }

    fn push_added(&mut self, content: &'a str, new_line: usize) {
        self.added
            .get_or_insert_with(|| Block::new(new_line))
            .lines
            .push(content);
    }

    fn into_entry(self, file_path: Option<String>) -> ChangeEntry {
        let (previous_code, previous_line) = match self.removed {
            Some(block) => (Some(block.text()), Some(block.start)),
            None => (None, None),
        };
        let (code, line) = match self.added {
            Some(block) => (Some(block.text()), Some(block.start)),
            None => (None, None),
        };

        ChangeEntry {
            file_path,
            previous_code,
            previous_line,
            code,
            line,
        }
    }
}

/// Everything carried from one line to the next.
#[derive(Debug, Clone)]
pub(super) struct Scan<'a> {
    pub(super) state: ParserState,
    pub(super) file_path: Option<String>,
    pending: PendingEntry<'a>,
    pub(super) last_was_removal: bool,
    /// Next old-file line number.
    pub(super) old_line: usize,
    /// Next new-file line number.
    pub(super) new_line: usize,
    pub(super) entries: Vec<ChangeEntry>,
}

impl Default for Scan<'_> {
    fn default() -> Self {
        Self {
            state: ParserState::OutsideHunk,
            file_path: None,
            pending: PendingEntry::default(),
            last_was_removal: false,
            old_line: 0,
            new_line: 0,
            entries: Vec::new(),
        }
    }
}

impl<'a> Scan<'a> {
    /// Apply one classified line.
    pub(super) fn step(mut self, line: DiffLine<'a>) -> Self {
        match (self.state, line) {
            (_, DiffLine::NoNewlineMarker) => {}
            (_, DiffLine::HunkHeader { header, file_path }) => {
                self.flush();
                if file_path.is_some() {
                    self.file_path = file_path;
                }
                self.old_line = header.old_start;
                self.new_line = header.new_start;
                self.last_was_removal = false;
                self.state = ParserState::InHunk;
            }
            (ParserState::OutsideHunk, _) => {}
            (ParserState::InHunk, DiffLine::Added(content)) => {
                self.pending.push_added(content, self.new_line);
                self.last_was_removal = false;
                self.new_line = self.new_line.saturating_add(1);
            }
            (ParserState::InHunk, DiffLine::Removed(content)) => {
                if !self.last_was_removal {
                    self.flush();
                }
                self.pending.push_removed(content, self.old_line);
                self.last_was_removal = true;
                self.old_line = self.old_line.saturating_add(1);
            }
            (ParserState::InHunk, DiffLine::Context) => {
                self.flush();
                self.last_was_removal = false;
                self.old_line = self.old_line.saturating_add(1);
                self.new_line = self.new_line.saturating_add(1);
            }
            (ParserState::InHunk, DiffLine::FileHeader | DiffLine::Other) => {
                self.state = ParserState::OutsideHunk;
            }
        }
        self
    }

    /// Returns true if no code has been collected since the last flush.
    pub(super) fn pending_is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Move the pending entry to the output if it carries any code.
    fn flush(&mut self) {
        let pending = std::mem::take(&mut self.pending);
        if !pending.is_empty() {
            self.entries.push(pending.into_entry(self.file_path.clone()));
        }
    }

    /// Flush at end of input and return the collected entries.
    pub(super) fn finish(mut self) -> Vec<ChangeEntry> {
        self.flush();
        self.entries
    }
}

/// Extract change entries from raw unified diff text.
///
/// This is the core parsing function. It is total: empty or malformed input
/// yields a (possibly empty) best-effort list, never an error.
///
/// # Arguments
///
/// * `diff_output` - Raw unified diff output, typically from `git diff`
///
/// # Returns
///
/// The change entries in the order their lines appear in the input.
/// Code is kept byte-exact, including a `\r` before the line break.
pub fn extract_entries(diff_output: &str) -> Vec<ChangeEntry> {
    let lines: Vec<&str> = diff_output.split_terminator('\n').collect();

    (0..lines.len())
        .map(|index| classify(&lines, index))
        .fold(Scan::default(), Scan::step)
        .finish()
}

/// Stateless extractor handle for callers that prefer a value to a free function.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiffEntryExtractor;

impl DiffEntryExtractor {
    /// Create an extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract change entries from raw unified diff text.
    pub fn extract(&self, diff_output: &str) -> Vec<ChangeEntry> {
        extract_entries(diff_output)
    }
}
