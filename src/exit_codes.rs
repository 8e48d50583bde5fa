//! Exit code constants for the diff-report CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid config)
//! - 3: Git operation failure
//! - 4: Report read/write failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// Git operation failure: git missing, unknown revision, diff failed.
pub const GIT_FAILURE: i32 = 3;

/// Report failure: a report file could not be read, parsed, or written.
pub const REPORT_FAILURE: i32 = 4;
