//! Directory scans for existing session files

use std::path::Path;

use glob::{MatchOptions, Pattern};

use super::filename::week_pattern;

/// Names of the `.md` files directly inside `dir`, sorted ascending.
///
/// A missing or unreadable directory yields an empty list.
pub(crate) fn markdown_files(dir: &Path) -> Vec<String> {
    let escaped = Pattern::escape(&dir.to_string_lossy());
    let pattern = format!("{escaped}/*.md");
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };
    let Ok(paths) = glob::glob_with(&pattern, options) else {
        return Vec::new();
    };

    let mut names: Vec<String> = paths
        .filter_map(Result::ok)
        .filter(|p| p.is_file())
        .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .collect();
    names.sort();
    names
}

/// Session files whose name mentions `week-WW`, oldest name first
pub(crate) fn find_week_sessions(sessions_dir: &Path, week: u32) -> Vec<String> {
    let needle = week_pattern(week);
    markdown_files(sessions_dir)
        .into_iter()
        .filter(|name| name.to_lowercase().contains(&needle))
        .collect()
}

/// Up to `limit` session files, newest name first
pub(crate) fn recent_sessions(sessions_dir: &Path, limit: usize) -> Vec<String> {
    let mut names = markdown_files(sessions_dir);
    names.reverse();
    names.truncate(limit);
    names
}
