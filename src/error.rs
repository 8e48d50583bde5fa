//! Error types for diff-report.
//!
//! Uses thiserror for derive macros. Extraction itself never fails; these
//! errors come from obtaining diff text, reading configuration, and reading
//! or writing report files.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for diff-report operations.
///
/// Each variant maps to a specific process exit code.
#[derive(Error, Debug)]
pub enum DiffReportError {
    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// Git could not be run or returned a failure.
    #[error("Git operation failed: {0}")]
    GitError(String),

    /// A report could not be read, parsed, or written.
    #[error("Report error: {0}")]
    ReportError(String),
}

impl DiffReportError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            DiffReportError::UserError(_) => exit_codes::USER_ERROR,
            DiffReportError::GitError(_) => exit_codes::GIT_FAILURE,
            DiffReportError::ReportError(_) => exit_codes::REPORT_FAILURE,
        }
    }
}

/// Result type alias for diff-report operations.
pub type Result<T> = std::result::Result<T, DiffReportError>;
