//! Report assembly and the reuse-or-regenerate decision.

use super::model::Report;
use crate::config::Config;
use crate::diff::{ChangeEntry, DiffEntryExtractor};
use crate::error::Result;
use crate::source::{CommitPair, DiffTextSource};
use globset::GlobSet;

/// What `ReportAssembler::update` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome {
    /// The existing report already matched both commits.
    Reused(Report),
    /// A new report was assembled from fresh diff text.
    Generated(Report),
}

impl ReportOutcome {
    pub fn report(&self) -> &Report {
        match self {
            ReportOutcome::Reused(report) | ReportOutcome::Generated(report) => report,
        }
    }

    pub fn into_report(self) -> Report {
        match self {
            ReportOutcome::Reused(report) | ReportOutcome::Generated(report) => report,
        }
    }

    pub fn is_reused(&self) -> bool {
        matches!(self, ReportOutcome::Reused(_))
    }
}

/// Wraps extracted entries and commit ids into reports.
#[derive(Debug, Clone)]
pub struct ReportAssembler {
    extractor: DiffEntryExtractor,
    exclude: GlobSet,
}

impl ReportAssembler {
    /// Build an assembler using the report settings from `config`.
    ///
    /// # Returns
    ///
    /// * `Err(DiffReportError::UserError)` - An `exclude_paths` pattern is invalid
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            extractor: DiffEntryExtractor::new(),
            exclude: config.exclude_globset()?,
        })
    }

    /// Extract entries from `raw_diff` and wrap them with `commits`.
    ///
    /// Entries whose file path matches an exclude pattern are dropped; entries
    /// without a file path are always kept.
    pub fn assemble(&self, raw_diff: &str, commits: CommitPair) -> Report {
        let extracted = self.extractor.extract(raw_diff);
        let total = extracted.len();

        let entries: Vec<ChangeEntry> = extracted
            .into_iter()
            .filter(|entry| !self.is_excluded(entry))
            .collect();

        if entries.len() < total {
            log::debug!(
                "excluded {} of {} entries by path",
                total - entries.len(),
                total
            );
        }

        Report::new(commits, entries)
    }

    /// Return `existing` if it matches the source's commits, otherwise assemble a new report.
    ///
    /// The diff text is only requested from `source` when regeneration is needed.
    pub fn update(
        &self,
        existing: Option<Report>,
        source: &dyn DiffTextSource,
    ) -> Result<ReportOutcome> {
        let commits = source.commit_ids()?;

        if let Some(report) = existing {
            if report.matches_commits(&commits) {
                log::info!(
                    "reusing report for {}..{}",
                    short(&commits.old_commit),
                    short(&commits.new_commit)
                );
                return Ok(ReportOutcome::Reused(report));
            }
            log::info!(
                "existing report is for {}..{}, regenerating",
                short(&report.old_commit),
                short(&report.new_commit)
            );
        }

        let raw_diff = source.raw_diff()?;
        let report = self.assemble(&raw_diff, commits);
        log::info!("generated report with {} entries", report.entries.len());
        Ok(ReportOutcome::Generated(report))
    }

    fn is_excluded(&self, entry: &ChangeEntry) -> bool {
        entry
            .file_path
            .as_deref()
            .is_some_and(|path| self.exclude.is_match(path))
    }
}

fn short(commit: &str) -> &str {
    commit.get(..8).unwrap_or(commit)
}
