//! Implementation of the `diff-report report` command.
//!
//! # What `diff-report report` does
//!
//! 1. Locates the repository root and loads config (`--config` or `.diff-report.yaml`)
//! 2. Loads the `--previous` report, if one was given and exists
//! 3. Reuses it when it was built from the same two commits, otherwise diffs them
//! 4. Writes the report to `--output` (atomically) or stdout

use crate::cli::ReportArgs;
use crate::config::Config;
use crate::error::Result;
use crate::fs::atomic_write_file;
use crate::git::get_repo_root;
use crate::report::{Report, ReportAssembler};
use crate::source::GitRevisionSource;
use std::path::Path;

/// Execute the `diff-report report` command.
pub fn cmd_report(args: ReportArgs) -> Result<()> {
    let repo_root = get_repo_root(&args.repo)?;

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::load_from_dir_or_default(&repo_root)?,
    };

    let previous = match &args.previous {
        Some(path) => load_previous(path),
        None => None,
    };

    let assembler = ReportAssembler::new(&config)?;
    let source = GitRevisionSource::new(&repo_root, args.old, args.new, config.clone());
    let outcome = assembler.update(previous, &source)?;
    let report = outcome.report();

    if args.summary {
        eprintln!("{}", report.summary());
    }

    let json = report.to_json(config.pretty)?;
    match &args.output {
        Some(path) => {
            atomic_write_file(path, &format!("{}\n", json))?;
            log::info!("wrote report to {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// Load a previously written report.
///
/// A missing or unreadable file only means nothing can be reused.
fn load_previous(path: &Path) -> Option<Report> {
    if !path.exists() {
        log::debug!("no previous report at {}", path.display());
        return None;
    }

    match Report::load(path) {
        Ok(report) => Some(report),
        Err(e) => {
            log::warn!("ignoring previous report: {}", e);
            None
        }
    }
}
