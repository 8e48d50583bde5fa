//! Git command runner for diff-report.
//!
//! Provides a safe wrapper around git commands with captured stdout/stderr
//! and structured error handling. All git operations should go through this module.

use crate::config::Config;
use crate::error::{DiffReportError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Result of a successful git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command, untouched.
    ///
    /// Diff text is whitespace-significant, so nothing is trimmed here.
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    /// Create a new GitOutput from raw output bytes.
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }

    /// Stdout with surrounding whitespace removed, for single-value commands.
    pub fn trimmed(&self) -> &str {
        self.stdout.trim()
    }
}

/// Run a git command with the specified working directory.
///
/// # Arguments
///
/// * `cwd` - The working directory to run the command in
/// * `args` - The git command arguments (without "git" prefix)
///
/// # Returns
///
/// * `Ok(GitOutput)` - On successful execution (exit code 0)
/// * `Err(DiffReportError::GitError)` - On spawn failure or non-zero exit code
///
/// # Examples
///
/// ```no_run
/// use diff_report::git::run_git;
/// use std::path::Path;
///
/// let output = run_git(Path::new("."), &["rev-parse", "HEAD"])?;
/// println!("HEAD is {}", output.trimmed());
/// # Ok::<(), diff_report::error::DiffReportError>(())
/// ```
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let cwd = cwd.as_ref();
    log::debug!("running git {} in {}", args.join(" "), cwd.display());

    let output = Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| {
            DiffReportError::GitError(format!(
                "failed to execute git {}: {}",
                args.first().unwrap_or(&""),
                e
            ))
        })?;

    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        Ok(git_output)
    } else {
        let exit_code = output.status.code().unwrap_or(-1);
        let error_msg = if git_output.stderr.is_empty() {
            git_output.trimmed().to_string()
        } else {
            git_output.stderr.clone()
        };

        Err(DiffReportError::GitError(format!(
            "git {} failed (exit code {}): {}",
            args.first().unwrap_or(&""),
            exit_code,
            error_msg
        )))
    }
}

/// Get the repository root directory using `git rev-parse --show-toplevel`.
///
/// # Returns
///
/// * `Ok(PathBuf)` - The absolute path to the repository root
/// * `Err(DiffReportError::UserError)` - If `cwd` is not inside a git repository
pub fn get_repo_root<P: AsRef<Path>>(cwd: P) -> Result<PathBuf> {
    let cwd = cwd.as_ref();
    let output = run_git(cwd, &["rev-parse", "--show-toplevel"]).map_err(|_| {
        DiffReportError::UserError(format!(
            "'{}' is not inside a git repository",
            cwd.display()
        ))
    })?;
    Ok(PathBuf::from(output.trimmed()))
}

/// Resolve a revision (branch, tag, short SHA, `HEAD~1`, ...) to a full commit id.
pub fn resolve_commit<P: AsRef<Path>>(cwd: P, revision: &str) -> Result<String> {
    let spec = format!("{}^{{commit}}", revision);
    let output = run_git(cwd, &["rev-parse", "--verify", "--quiet", &spec]).map_err(|_| {
        DiffReportError::GitError(format!("unknown revision '{}'", revision))
    })?;
    Ok(output.trimmed().to_string())
}

/// Produce unified diff text between two commits.
///
/// Prefixes are forced to `a/` and `b/` and colors and external diff drivers
/// are disabled, so the output parses the same regardless of user git config.
pub fn diff_commits<P: AsRef<Path>>(
    cwd: P,
    old_commit: &str,
    new_commit: &str,
    config: &Config,
) -> Result<String> {
    let args = diff_args(old_commit, new_commit, config);
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    let output = run_git(cwd, &args)?;
    Ok(output.stdout)
}

/// Build the argument list for `git diff`.
fn diff_args(old_commit: &str, new_commit: &str, config: &Config) -> Vec<String> {
    let mut args = vec![
        "diff".to_string(),
        "--no-color".to_string(),
        "--no-ext-diff".to_string(),
        "--no-renames".to_string(),
        "--src-prefix=a/".to_string(),
        "--dst-prefix=b/".to_string(),
        format!("-U{}", config.context_lines),
        format!("--diff-algorithm={}", config.diff_algorithm.as_git_arg()),
    ];
    if config.ignore_whitespace {
        args.push("-w".to_string());
    }
    args.push(old_commit.to_string());
    args.push(new_commit.to_string());
    args.push("--".to_string());
    args
}
