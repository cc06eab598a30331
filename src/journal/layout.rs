//! On-disk layout of a journal
//!
//! A journal root holds `sessions/`, `summaries/` and `templates/`
//! side by side, plus the counter record.

use std::fs;
use std::path::{Path, PathBuf};

use crate::consts::{COUNTER_FILE, SESSIONS_DIR, SUMMARIES_DIR, TEMPLATES_DIR};
use crate::error::AppError;

#[derive(Debug, Clone)]
pub(crate) struct JournalLayout {
    root: PathBuf,
}

impl JournalLayout {
    pub(crate) fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Layout for `journal_dir` resolved against `project_root`
    pub(crate) fn for_project(project_root: &Path, journal_dir: &Path) -> Self {
        Self::new(project_root.join(journal_dir))
    }

    pub(crate) fn root(&self) -> &Path {
        &self.root
    }

    pub(crate) fn sessions_dir(&self) -> PathBuf {
        self.root.join(SESSIONS_DIR)
    }

    pub(crate) fn summaries_dir(&self) -> PathBuf {
        self.root.join(SUMMARIES_DIR)
    }

    pub(crate) fn templates_dir(&self) -> PathBuf {
        self.root.join(TEMPLATES_DIR)
    }

    pub(crate) fn counter_file(&self) -> PathBuf {
        self.root.join(COUNTER_FILE)
    }

    /// Create every directory of the layout that does not exist yet
    pub(crate) fn ensure_dirs(&self) -> Result<(), AppError> {
        for dir in [self.sessions_dir(), self.summaries_dir(), self.templates_dir()] {
            fs::create_dir_all(&dir).map_err(|source| AppError::CreateDir { path: dir, source })?;
        }
        Ok(())
    }
}
