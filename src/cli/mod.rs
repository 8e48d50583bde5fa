//! CLI argument parsing for diff-report.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// diff-report: turn unified git diffs into ordered change entries.
///
/// Each entry is a contiguous block of removed and/or added lines with its
/// file path and start line in the old and new file.
#[derive(Parser, Debug)]
#[command(name = "diff-report")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). Logs go to stderr.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for diff-report.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Extract change entries from raw diff text.
    ///
    /// Reads unified diff output from FILE (or stdin) and prints the entries as JSON.
    Extract(ExtractArgs),

    /// Build a report between two revisions of a repository.
    ///
    /// Reuses `--previous` when it was built from the same two commits;
    /// otherwise runs `git diff` and assembles a new report.
    Report(ReportArgs),
}

/// Arguments for the `extract` command.
#[derive(Parser, Debug)]
pub struct ExtractArgs {
    /// File containing diff text. Reads stdin when omitted or "-".
    pub file: Option<PathBuf>,

    /// Print compact JSON instead of pretty-printed.
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for the `report` command.
#[derive(Parser, Debug)]
pub struct ReportArgs {
    /// Repository to diff.
    #[arg(long, default_value = ".")]
    pub repo: PathBuf,

    /// Old revision (e.g. the template commit).
    #[arg(long)]
    pub old: String,

    /// New revision (e.g. the solution commit).
    #[arg(long)]
    pub new: String,

    /// Previously written report to reuse when its commits still match.
    #[arg(long)]
    pub previous: Option<PathBuf>,

    /// Write the report here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file (defaults to .diff-report.yaml in the repository root).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print a one-line summary to stderr.
    #[arg(long)]
    pub summary: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
