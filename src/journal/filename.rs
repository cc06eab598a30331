//! Filename contract for sessions and summaries
//!
//! Sessions: `YYYY-MM-DD-session-NNN-<topic>.md`
//! Summaries: `week-WW-summary.md`

use chrono::NaiveDate;

use crate::utils::format_date;

pub(super) fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Reduce free text to a filesystem-safe slug.
///
/// Lowercases, drops anything that is not a word character, whitespace or
/// hyphen, then joins the whitespace-separated pieces with single hyphens.
pub(crate) fn sanitize_topic(topic: &str) -> String {
    let kept: String = topic
        .to_lowercase()
        .chars()
        .filter(|&c| is_word_char(c) || c.is_whitespace() || c == '-')
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join("-")
}

/// Session number as it appears in filenames and titles: at least 3 digits
pub(crate) fn format_ordinal(number: u64) -> String {
    format!("{number:03}")
}

pub(crate) fn session_filename(date: NaiveDate, number: u64, topic: &str) -> String {
    format!(
        "{}-session-{}-{}.md",
        format_date(date),
        format_ordinal(number),
        sanitize_topic(topic)
    )
}

/// Substring that ties a session file to a week, e.g. `week-03`
pub(crate) fn week_pattern(week: u32) -> String {
    format!("week-{week:02}")
}

pub(crate) fn summary_filename(week: u32) -> String {
    format!("{}-summary.md", week_pattern(week))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn session_filename_matches_contract() {
        assert_eq!(
            session_filename(day(2024, 1, 15), 3, "Player Implementation"),
            "2024-01-15-session-003-player-implementation.md"
        );
    }

    #[test]
    fn ordinal_grows_past_three_digits() {
        assert_eq!(format_ordinal(7), "007");
        assert_eq!(format_ordinal(1234), "1234");
    }

    #[test]
    fn sanitize_strips_punctuation() {
        assert_eq!(sanitize_topic("C# Signals & Events!"), "c-signals-events");
        assert_eq!(sanitize_topic("week-01: setup"), "week-01-setup");
        assert_eq!(sanitize_topic("snake_case stays"), "snake_case-stays");
    }

    #[test]
    fn sanitize_collapses_and_trims_whitespace() {
        assert_eq!(sanitize_topic("  many   spaces\there  "), "many-spaces-here");
        assert_eq!(sanitize_topic("   "), "");
    }

    #[test]
    fn sanitize_drops_non_ascii_letters() {
        assert_eq!(sanitize_topic("Café Über"), "caf-ber");
    }

    #[test]
    fn sanitized_output_uses_only_slug_characters() {
        let inputs = [
            "Player Implementation",
            "  (draft)  Combat -- System  ",
            "Ünïcödé / paths \\ and \"quotes\"",
            "tabs\tand\nnewlines",
            "",
        ];
        for input in inputs {
            let slug = sanitize_topic(input);
            assert!(
                slug.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-'),
                "{input:?} -> {slug:?}"
            );
            assert!(!slug.contains(char::is_whitespace));
        }
    }

    #[test]
    fn summary_names() {
        assert_eq!(week_pattern(1), "week-01");
        assert_eq!(summary_filename(12), "week-12-summary.md");
    }
}
