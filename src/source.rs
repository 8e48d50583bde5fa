//! Sources of raw diff text.
//!
//! The extractor only ever sees a string. Obtaining that string (running
//! git, reading a file) and naming the two trees it compares is the job of a
//! `DiffTextSource`, and any failure doing so is reported here, not by the
//! extractor.

use crate::config::Config;
use crate::error::Result;
use crate::git::{diff_commits, resolve_commit};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Identifiers of the old and new tree a diff compares.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitPair {
    pub old_commit: String,
    pub new_commit: String,
}

impl CommitPair {
    pub fn new(old_commit: impl Into<String>, new_commit: impl Into<String>) -> Self {
        Self {
            old_commit: old_commit.into(),
            new_commit: new_commit.into(),
        }
    }
}

/// Something that can produce unified diff text for a pair of trees.
pub trait DiffTextSource {
    /// Identifiers of the two trees. Cheap compared to `raw_diff`.
    fn commit_ids(&self) -> Result<CommitPair>;

    /// Unified diff text from the old tree to the new one.
    fn raw_diff(&self) -> Result<String>;
}

/// Diff between two revisions of one git repository.
#[derive(Debug, Clone)]
pub struct GitRevisionSource {
    repo: PathBuf,
    old_rev: String,
    new_rev: String,
    config: Config,
}

impl GitRevisionSource {
    pub fn new(
        repo: impl Into<PathBuf>,
        old_rev: impl Into<String>,
        new_rev: impl Into<String>,
        config: Config,
    ) -> Self {
        Self {
            repo: repo.into(),
            old_rev: old_rev.into(),
            new_rev: new_rev.into(),
            config,
        }
    }
}

impl DiffTextSource for GitRevisionSource {
    fn commit_ids(&self) -> Result<CommitPair> {
        Ok(CommitPair {
            old_commit: resolve_commit(&self.repo, &self.old_rev)?,
            new_commit: resolve_commit(&self.repo, &self.new_rev)?,
        })
    }

    fn raw_diff(&self) -> Result<String> {
        // Diff resolved ids so a branch moving mid-run cannot mismatch the report's ids.
        let commits = self.commit_ids()?;
        diff_commits(
            &self.repo,
            &commits.old_commit,
            &commits.new_commit,
            &self.config,
        )
    }
}

/// Diff text that has already been produced elsewhere.
#[derive(Debug, Clone)]
pub struct RawDiffSource {
    text: String,
    commits: CommitPair,
}

impl RawDiffSource {
    pub fn new(text: impl Into<String>, commits: CommitPair) -> Self {
        Self {
            text: text.into(),
            commits,
        }
    }
}

impl DiffTextSource for RawDiffSource {
    fn commit_ids(&self) -> Result<CommitPair> {
        Ok(self.commits.clone())
    }

    fn raw_diff(&self) -> Result<String> {
        Ok(self.text.clone())
    }
}
