use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Create a repository with one commit containing `README.md`.
pub(crate) fn create_test_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    git(path, &["init"]);
    // Deterministic default branch name across environments.
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"]);

    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);
    // A user-level diff.noprefix or color setting must not leak into tests.
    git(path, &["config", "diff.noprefix", "false"]);
    git(path, &["config", "color.ui", "false"]);

    commit_file(path, "README.md", "# Test\n", "Initial commit");

    temp_dir
}

/// Write `content` to `relative` (creating parent directories) and commit it.
pub(crate) fn commit_file(repo_dir: &Path, relative: &str, content: &str, message: &str) {
    let file = repo_dir.join(relative);
    if let Some(parent) = file.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&file, content).unwrap();
    git(repo_dir, &["add", "-A"]);
    git(repo_dir, &["commit", "-m", message]);
}

/// Delete `relative` and commit the removal.
pub(crate) fn commit_removal(repo_dir: &Path, relative: &str, message: &str) {
    git(repo_dir, &["rm", "-q", relative]);
    git(repo_dir, &["commit", "-m", message]);
}

/// Full SHA of HEAD.
pub(crate) fn head(repo_dir: &Path) -> String {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(["rev-parse", "HEAD"])
        .output()
        .unwrap();
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

fn git(repo_dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }
}
