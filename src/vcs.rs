//! Read-only git context for the interactive prompt
//!
//! Everything here is best effort: a missing binary or a directory that is
//! not a repository reads as "nothing to show".

use std::path::Path;
use std::process::Command;

use crate::error::GitError;

fn run_git(root: &Path, args: &[&str]) -> Result<String, GitError> {
    let output = Command::new("git")
        .args(args)
        .current_dir(root)
        .output()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GitError::NotFound
            } else {
                GitError::Spawn(e)
            }
        })?;

    if output.status.success() {
        String::from_utf8(output.stdout).map_err(GitError::Utf8)
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(GitError::Command(stderr.trim().to_string()))
    }
}

fn non_empty_lines(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// `git status --porcelain` lines, or `None` when git has nothing to say
pub(crate) fn working_tree_changes(root: &Path) -> Option<Vec<String>> {
    match run_git(root, &["status", "--porcelain"]) {
        Ok(out) => {
            let lines = non_empty_lines(&out);
            (!lines.is_empty()).then_some(lines)
        }
        Err(e) => {
            log::debug!("git status unavailable: {e}");
            None
        }
    }
}

/// Subjects of the last `count` commits, newest first
pub(crate) fn recent_commits(root: &Path, count: usize) -> Vec<String> {
    let limit = format!("-{count}");
    match run_git(root, &["log", "--oneline", &limit]) {
        Ok(out) => non_empty_lines(&out),
        Err(e) => {
            log::debug!("git log unavailable: {e}");
            Vec::new()
        }
    }
}
