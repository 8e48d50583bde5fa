//! Tests for report assembly.

use super::{Report, ReportAssembler, ReportOutcome, ReportSummary};
use crate::config::Config;
use crate::diff::ChangeEntry;
use crate::error::{DiffReportError, Result};
use crate::source::{CommitPair, DiffTextSource, GitRevisionSource, RawDiffSource};
use crate::test_support::{commit_file, commit_removal, create_test_repo, head};
use std::cell::Cell;
use tempfile::TempDir;

const DIFF: &str = r#"diff --git a/src/App.java b/src/App.java
index 1111111..2222222 100644
--- a/src/App.java
+++ b/src/App.java
@@ -1,3 +1,3 @@
 class App {
-    int x;
+    long x;
 }
diff --git a/Cargo.lock b/Cargo.lock
index 3333333..4444444 100644
--- a/Cargo.lock
+++ b/Cargo.lock
@@ -4,0 +5,1 @@
+checksum = "abc"
"#;

/// Source that counts how often its diff text is requested.
struct CountingSource {
    commits: CommitPair,
    diff_calls: Cell<usize>,
}

impl CountingSource {
    fn new(old: &str, new: &str) -> Self {
        Self {
            commits: CommitPair::new(old, new),
            diff_calls: Cell::new(0),
        }
    }
}

impl DiffTextSource for CountingSource {
    fn commit_ids(&self) -> Result<CommitPair> {
        Ok(self.commits.clone())
    }

    fn raw_diff(&self) -> Result<String> {
        self.diff_calls.set(self.diff_calls.get() + 1);
        Ok(DIFF.to_string())
    }
}

/// Source whose diff cannot be produced.
struct FailingSource;

impl DiffTextSource for FailingSource {
    fn commit_ids(&self) -> Result<CommitPair> {
        Ok(CommitPair::new("old", "new"))
    }

    fn raw_diff(&self) -> Result<String> {
        Err(DiffReportError::GitError("diff exploded".to_string()))
    }
}

#[test]
fn test_assemble_stamps_commits_and_entries() {
    let assembler = ReportAssembler::new(&Config::default()).unwrap();

    let report = assembler.assemble(DIFF, CommitPair::new("t1", "s1"));

    assert_eq!(report.old_commit, "t1");
    assert_eq!(report.new_commit, "s1");
    assert_eq!(
        report.entries,
        vec![
            ChangeEntry::replace("src/App.java", "    int x;", 2, "    long x;", 2),
            ChangeEntry::addition("Cargo.lock", "checksum = \"abc\"", 5),
        ]
    );
}

#[test]
fn test_assemble_drops_excluded_paths() {
    let config = Config {
        exclude_paths: vec!["*.lock".to_string()],
        ..Config::default()
    };
    let assembler = ReportAssembler::new(&config).unwrap();

    let report = assembler.assemble(DIFF, CommitPair::new("t1", "s1"));

    assert_eq!(report.entries.len(), 1);
    assert_eq!(report.entries[0].file_path.as_deref(), Some("src/App.java"));
}

#[test]
fn test_assemble_keeps_entries_without_path() {
    let config = Config {
        exclude_paths: vec!["**".to_string()],
        ..Config::default()
    };
    let assembler = ReportAssembler::new(&config).unwrap();

    let report = assembler.assemble("@@ -1 +1 @@\n+x\n", CommitPair::new("a", "b"));

    assert_eq!(report.entries.len(), 1);
    assert_eq!(report.entries[0].file_path, None);
}

#[test]
fn test_new_rejects_invalid_exclude_pattern() {
    let config = Config {
        exclude_paths: vec!["[".to_string()],
        ..Config::default()
    };

    let result = ReportAssembler::new(&config);
    assert!(matches!(result, Err(DiffReportError::UserError(_))));
}

#[test]
fn test_update_without_existing_generates() {
    let assembler = ReportAssembler::new(&Config::default()).unwrap();
    let source = CountingSource::new("t1", "s1");

    let outcome = assembler.update(None, &source).unwrap();

    assert!(!outcome.is_reused());
    assert_eq!(source.diff_calls.get(), 1);
    assert_eq!(outcome.report().entries.len(), 2);
}

#[test]
fn test_update_reuses_matching_report() {
    let assembler = ReportAssembler::new(&Config::default()).unwrap();
    let existing = Report::new(CommitPair::new("t1", "s1"), Vec::new());
    let source = CountingSource::new("t1", "s1");

    let outcome = assembler.update(Some(existing.clone()), &source).unwrap();

    assert_eq!(outcome, ReportOutcome::Reused(existing));
    assert_eq!(source.diff_calls.get(), 0);
}

#[test]
fn test_update_regenerates_when_either_commit_changes() {
    let assembler = ReportAssembler::new(&Config::default()).unwrap();

    for (old, new) in [("t2", "s1"), ("t1", "s2")] {
        let existing = Report::new(CommitPair::new("t1", "s1"), Vec::new());
        let source = CountingSource::new(old, new);

        let outcome = assembler.update(Some(existing), &source).unwrap();

        assert!(!outcome.is_reused());
        assert_eq!(source.diff_calls.get(), 1);
        let report = outcome.into_report();
        assert_eq!(report.commits(), CommitPair::new(old, new));
    }
}

#[test]
fn test_update_propagates_source_errors() {
    let assembler = ReportAssembler::new(&Config::default()).unwrap();

    let result = assembler.update(None, &FailingSource);

    assert!(matches!(result, Err(DiffReportError::GitError(_))));
}

#[test]
fn test_matches_commits() {
    let report = Report::new(CommitPair::new("a", "b"), Vec::new());

    assert!(report.matches_commits(&CommitPair::new("a", "b")));
    assert!(!report.matches_commits(&CommitPair::new("a", "c")));
    assert!(!report.matches_commits(&CommitPair::new("b", "a")));
}

#[test]
fn test_summary_counts() {
    let report = Report::new(
        CommitPair::new("a", "b"),
        vec![
            ChangeEntry::addition("x.rs", "1\n2", 1),
            ChangeEntry::removal("x.rs", "3", 4),
            ChangeEntry::replace("y.rs", "4\n5\n6", 1, "7", 1),
        ],
    );

    let summary = report.summary();

    assert_eq!(
        summary,
        ReportSummary {
            files: 2,
            additions: 1,
            removals: 1,
            replacements: 1,
            added_lines: 3,
            removed_lines: 4,
        }
    );
    assert_eq!(
        summary.to_string(),
        "2 file(s): 1 addition(s), 1 removal(s), 1 replacement(s) (+3 -4 lines)"
    );
}

#[test]
fn test_report_json_roundtrip_and_load() {
    let temp_dir = TempDir::new().unwrap();
    let report = Report::new(
        CommitPair::new("a", "b"),
        vec![ChangeEntry::removal("gone.rs", "fn old() {}", 3)],
    );

    let json = report.to_json(true).unwrap();
    assert!(json.contains("\"oldCommit\": \"a\""));
    assert!(json.contains("\"previousLine\": 3"));
    assert!(!json.contains("\"code\""));

    let path = temp_dir.path().join("report.json");
    std::fs::write(&path, &json).unwrap();
    assert_eq!(Report::load(&path).unwrap(), report);
}

#[test]
fn test_invalid_report_json_is_report_error() {
    let result = Report::from_json("{\"oldCommit\": 1}");
    assert!(matches!(result, Err(DiffReportError::ReportError(_))));
}

/// Integration test: assemble a report from a real repository.
#[test]
fn test_report_from_git_history() {
    let temp_dir = create_test_repo();
    let path = temp_dir.path();
    commit_file(path, "src/Main.java", "class Main {\n    int a;\n}\n", "Template");
    commit_file(path, "obsolete.txt", "bye\n", "Obsolete");
    let template = head(path);

    commit_file(path, "src/Main.java", "class Main {\n    long a;\n    int b;\n}\n", "Solve");
    commit_removal(path, "obsolete.txt", "Drop obsolete");
    commit_file(path, "src/Helper.java", "class Helper {}\n", "Helper");
    let solution = head(path);

    let assembler = ReportAssembler::new(&Config::default()).unwrap();
    let source = GitRevisionSource::new(path, template.as_str(), solution.as_str(), Config::default());
    let report = assembler.update(None, &source).unwrap().into_report();

    assert_eq!(report.commits(), CommitPair::new(template.clone(), solution.clone()));

    let find = |file: &str| -> Vec<&ChangeEntry> {
        report
            .entries
            .iter()
            .filter(|e| e.file_path.as_deref() == Some(file))
            .collect()
    };

    assert_eq!(
        find("src/Main.java"),
        vec![&ChangeEntry::replace(
            "src/Main.java",
            "    int a;",
            2,
            "    long a;\n    int b;",
            2
        )]
    );
    assert_eq!(
        find("obsolete.txt"),
        vec![&ChangeEntry::removal("obsolete.txt", "bye", 1)]
    );
    assert_eq!(
        find("src/Helper.java"),
        vec![&ChangeEntry::addition("src/Helper.java", "class Helper {}", 1)]
    );

    // Same commits again: the report is reused untouched.
    let again = assembler.update(Some(report.clone()), &source).unwrap();
    assert_eq!(again, ReportOutcome::Reused(report));
}

#[test]
fn test_raw_source_update() {
    let assembler = ReportAssembler::new(&Config::default()).unwrap();
    let source = RawDiffSource::new(DIFF, CommitPair::new("x", "y"));

    let report = assembler.update(None, &source).unwrap().into_report();

    assert_eq!(report.entries.len(), 2);
}
