//! Persistent session counter
//!
//! A single integer stored as `{ "session_count": N }`. Missing or malformed
//! records heal to 0 on load; increments are written before they are
//! reported.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::Loaded;
use super::persist::write_atomic;
use crate::error::AppError;

#[derive(Debug, Serialize, Deserialize)]
struct CounterRecord {
    session_count: u64,
}

#[derive(Debug)]
pub(crate) struct SessionCounter {
    path: PathBuf,
    count: u64,
}

impl SessionCounter {
    /// Load the counter from `path`, resetting it to 0 when absent or invalid.
    ///
    /// The reset is written back immediately. A failure to write it is
    /// logged and otherwise ignored; the next increment will try again.
    pub(crate) fn load(path: impl Into<PathBuf>) -> Loaded<Self> {
        let path = path.into();
        match read_count(&path) {
            Some(count) => Loaded::stored(Self { path, count }),
            None => {
                log::debug!("session counter {} unusable, starting at 0", path.display());
                let counter = Self { path, count: 0 };
                if let Err(e) = counter.save(0) {
                    log::warn!("{e}");
                }
                Loaded::defaulted(counter)
            }
        }
    }

    pub(crate) fn count(&self) -> u64 {
        self.count
    }

    /// Number the next increment will hand out
    pub(crate) fn next_number(&self) -> Result<u64, AppError> {
        self.count
            .checked_add(1)
            .ok_or(AppError::CounterExhausted { count: self.count })
    }

    /// Advance the counter by one and persist it. Returns the new count.
    ///
    /// The in-memory value only moves once the record is on disk.
    pub(crate) fn increment(&mut self) -> Result<u64, AppError> {
        let next = self.next_number()?;
        self.save(next)?;
        self.count = next;
        log::debug!("session counter now {next}");
        Ok(next)
    }

    fn save(&self, count: u64) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(&CounterRecord {
            session_count: count,
        })?;
        write_atomic(&self.path, &json)
    }
}

fn read_count(path: &Path) -> Option<u64> {
    let content = fs::read_to_string(path).ok()?;
    let value: serde_json::Value = serde_json::from_str(&content).ok()?;
    // only an integer >= 0 counts; floats, negatives and strings reset
    value.get("session_count")?.as_u64()
}
