use chrono::NaiveDate;

use crate::consts::DATE_FORMAT;
use crate::error::AppError;

/// Parse a session date given as YYYYMMDD or YYYY-MM-DD
pub(crate) fn parse_date(s: &str) -> Result<NaiveDate, AppError> {
    let trimmed = s.trim();
    if trimmed.len() == 8
        && let Ok(d) = NaiveDate::parse_from_str(trimmed, "%Y%m%d")
    {
        return Ok(d);
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| AppError::InvalidDate {
        input: s.to_string(),
    })
}

/// Format a date the way it appears in filenames and templates
pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
