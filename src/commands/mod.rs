//! Command implementations for diff-report.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod extract;
mod report;

use crate::cli::Command;
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Extract(args) => extract::cmd_extract(args),
        Command::Report(args) => report::cmd_report(args),
    }
}
