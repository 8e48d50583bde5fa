//! Reports: extracted change entries plus the two commit ids they describe.
//!
//! A report is reused as long as both commit ids are unchanged; otherwise it
//! is regenerated from fresh diff text.

mod assembler;
mod model;

#[cfg(test)]
mod tests;

// Re-export public API
pub use assembler::{ReportAssembler, ReportOutcome};
pub use model::{Report, ReportSummary};
