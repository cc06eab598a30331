use chrono::NaiveDate;
use serde::Serialize;

use crate::consts::DATE_FORMAT;

/// What a session filename says about the session it holds
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct SessionRecord {
    pub(crate) file: String,
    pub(crate) number: Option<u64>,
    pub(crate) date: Option<NaiveDate>,
    pub(crate) topic: Option<String>,
}

impl SessionRecord {
    /// Parse `YYYY-MM-DD-session-NNN-<topic>.md`.
    ///
    /// Files that do not follow the pattern keep their name with the
    /// other fields empty.
    pub(crate) fn from_filename(file: &str) -> Self {
        let parsed = parse_parts(file);
        Self {
            file: file.to_string(),
            number: parsed.as_ref().map(|p| p.1),
            date: parsed.as_ref().map(|p| p.0),
            topic: parsed.map(|p| p.2),
        }
    }
}

fn parse_parts(file: &str) -> Option<(NaiveDate, u64, String)> {
    let stem = file.strip_suffix(".md")?;
    let date_part = stem.get(..10)?;
    let date = NaiveDate::parse_from_str(date_part, DATE_FORMAT).ok()?;
    let rest = stem.get(10..)?.strip_prefix("-session-")?;
    let (digits, topic) = rest.split_once('-')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let number = digits.parse().ok()?;
    Some((date, number, topic.to_string()))
}
