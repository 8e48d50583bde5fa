//! Implementation of the `diff-report extract` command.
//!
//! Reads raw unified diff text from a file or stdin and prints the extracted
//! change entries as a JSON array on stdout.

use crate::cli::ExtractArgs;
use crate::diff::extract_entries;
use crate::error::{DiffReportError, Result};
use std::io::Read;
use std::path::Path;

/// Execute the `diff-report extract` command.
pub fn cmd_extract(args: ExtractArgs) -> Result<()> {
    let text = match args.file.as_deref() {
        Some(path) if path != Path::new("-") => read_diff_file(path)?,
        _ => read_stdin()?,
    };

    println!("{}", entries_json(&text, !args.compact)?);
    Ok(())
}

/// Extract entries from `text` and serialize them.
fn entries_json(text: &str, pretty: bool) -> Result<String> {
    let entries = extract_entries(text);
    log::info!("extracted {} change entries", entries.len());

    let result = if pretty {
        serde_json::to_string_pretty(&entries)
    } else {
        serde_json::to_string(&entries)
    };
    result.map_err(|e| DiffReportError::ReportError(format!("failed to serialize entries: {}", e)))
}

fn read_diff_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| {
        DiffReportError::UserError(format!("failed to read '{}': {}", path.display(), e))
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn read_stdin() -> Result<String> {
    let mut bytes = Vec::new();
    std::io::stdin()
        .read_to_end(&mut bytes)
        .map_err(|e| DiffReportError::UserError(format!("failed to read stdin: {}", e)))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
