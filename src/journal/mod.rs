//! Journal storage: counter, filenames, templates and the builders that tie
//! them together.

pub(crate) mod counter;
pub(crate) mod filename;
pub(crate) mod layout;
mod persist;
pub(crate) mod record;
pub(crate) mod scan;
pub(crate) mod summary;
pub(crate) mod template;

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::error::AppError;

pub(crate) use counter::SessionCounter;
pub(crate) use filename::{format_ordinal, session_filename, summary_filename};
pub(crate) use layout::JournalLayout;
pub(crate) use record::SessionRecord;
pub(crate) use scan::{find_week_sessions, recent_sessions};
use template::{Bindings, load_template, render};

/// A value together with whether it came from a built-in default
#[derive(Debug, Clone)]
pub(crate) struct Loaded<T> {
    pub(crate) value: T,
    pub(crate) used_default: bool,
}

impl<T> Loaded<T> {
    pub(crate) fn stored(value: T) -> Self {
        Self {
            value,
            used_default: false,
        }
    }

    pub(crate) fn defaulted(value: T) -> Self {
        Self {
            value,
            used_default: true,
        }
    }
}

/// Input for a new session file
#[derive(Debug, Clone)]
pub(crate) struct SessionRequest {
    pub(crate) topic: String,
    pub(crate) phase: Option<String>,
    pub(crate) focus: Option<String>,
    pub(crate) date: NaiveDate,
}

#[derive(Debug, Clone)]
pub(crate) struct CreatedSession {
    pub(crate) path: PathBuf,
    pub(crate) number: u64,
}

pub(crate) struct Journal {
    layout: JournalLayout,
    counter: SessionCounter,
    template_name: String,
}

impl Journal {
    /// Create the directory tree if needed and load the counter.
    pub(crate) fn open(layout: JournalLayout, template_name: &str) -> Result<Self, AppError> {
        layout.ensure_dirs()?;
        let counter = SessionCounter::load(layout.counter_file()).value;
        Ok(Self {
            layout,
            counter,
            template_name: template_name.to_string(),
        })
    }

    pub(crate) fn layout(&self) -> &JournalLayout {
        &self.layout
    }

    pub(crate) fn counter(&self) -> &SessionCounter {
        &self.counter
    }

    /// Filename a session on `date` would get; `number` defaults to the
    /// counter's next value.
    pub(crate) fn session_filename(
        &self,
        topic: &str,
        number: Option<u64>,
        date: NaiveDate,
    ) -> Result<String, AppError> {
        let number = match number {
            Some(n) => n,
            None => self.counter.next_number()?,
        };
        Ok(session_filename(date, number, topic))
    }

    /// Allocate a number, render the template and write the session file.
    ///
    /// The counter is advanced before anything else is written and is not
    /// rolled back if the session file cannot be written.
    pub(crate) fn create_session(
        &mut self,
        request: &SessionRequest,
    ) -> Result<CreatedSession, AppError> {
        let number = self.counter.increment()?;
        let filename = session_filename(request.date, number, &request.topic);
        let path = self.layout.sessions_dir().join(filename);

        let template = load_template(&self.layout.templates_dir(), &self.template_name);
        if template.used_default {
            log::debug!("rendering session {number} from the built-in template");
        }
        let bindings = Bindings::for_session(
            number,
            &request.topic,
            request.date,
            request.phase.as_deref(),
            request.focus.as_deref(),
        );
        let content = render(&template.value, &bindings);

        persist::write_file(&path, &content)?;
        log::debug!("wrote {}", path.display());
        Ok(CreatedSession { path, number })
    }

    /// Write `summaries/week-WW-summary.md` linking the week's sessions.
    pub(crate) fn create_weekly_summary(&self, week: u32) -> Result<PathBuf, AppError> {
        let sessions = self.find_week_sessions(week);
        log::debug!("week {week}: {} matching sessions", sessions.len());
        let path = self.layout.summaries_dir().join(summary_filename(week));
        persist::write_file(&path, &summary::render_weekly_summary(week, &sessions))?;
        Ok(path)
    }

    pub(crate) fn find_week_sessions(&self, week: u32) -> Vec<String> {
        find_week_sessions(&self.layout.sessions_dir(), week)
    }

    pub(crate) fn recent_sessions(&self, limit: usize) -> Vec<String> {
        recent_sessions(&self.layout.sessions_dir(), limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn open_in(tmp: &tempfile::TempDir) -> Journal {
        let layout = JournalLayout::new(tmp.path().join("journal"));
        Journal::open(layout, "session-template.md").unwrap()
    }

    fn request(topic: &str, date: NaiveDate) -> SessionRequest {
        SessionRequest {
            topic: topic.to_string(),
            phase: None,
            focus: None,
            date,
        }
    }

    #[test]
    fn open_creates_layout_and_counter() {
        let tmp = tempfile::tempdir().unwrap();
        let journal = open_in(&tmp);
        assert!(journal.layout().sessions_dir().is_dir());
        assert!(journal.layout().counter_file().is_file());
        assert_eq!(journal.counter().count(), 0);
    }

    #[test]
    fn creates_numbered_session_files() {
        let tmp = tempfile::tempdir().unwrap();
        let mut journal = open_in(&tmp);

        let first = journal
            .create_session(&SessionRequest {
                phase: Some("week-01".to_string()),
                focus: Some("Movement basics".to_string()),
                ..request("Player Implementation", day(2024, 1, 15))
            })
            .unwrap();
        assert_eq!(first.number, 1);
        assert_eq!(
            first.path.file_name().unwrap(),
            "2024-01-15-session-001-player-implementation.md"
        );
        let content = fs::read_to_string(&first.path).unwrap();
        assert!(content.starts_with("# Session 001: Player Implementation\n"));
        assert!(content.contains("**Date**: 2024-01-15"));
        assert!(content.contains("**Learning Phase**: week-01"));
        assert!(content.contains("**Focus**: Movement basics"));

        let second = journal.create_session(&request("combat", day(2024, 1, 16))).unwrap();
        assert_eq!(second.number, 2);
        let content = fs::read_to_string(&second.path).unwrap();
        assert!(content.contains("[Week N / Phase Name]"));
    }

    #[test]
    fn numbering_survives_reopen() {
        let tmp = tempfile::tempdir().unwrap();
        {
            let mut journal = open_in(&tmp);
            journal.create_session(&request("a", day(2024, 1, 1))).unwrap();
            journal.create_session(&request("b", day(2024, 1, 1))).unwrap();
        }
        let mut journal = open_in(&tmp);
        assert_eq!(
            journal.session_filename("c", None, day(2024, 1, 2)).unwrap(),
            "2024-01-02-session-003-c.md"
        );
        let created = journal.create_session(&request("c", day(2024, 1, 2))).unwrap();
        assert_eq!(created.number, 3);
    }

    #[test]
    fn explicit_number_overrides_counter() {
        let tmp = tempfile::tempdir().unwrap();
        let journal = open_in(&tmp);
        assert_eq!(
            journal
                .session_filename("Player Implementation", Some(3), day(2024, 1, 15))
                .unwrap(),
            "2024-01-15-session-003-player-implementation.md"
        );
    }

    #[test]
    fn saturated_counter_creates_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let counter_file = tmp.path().join("journal").join("session_counter.json");
        fs::create_dir_all(counter_file.parent().unwrap()).unwrap();
        fs::write(&counter_file, format!(r#"{{"session_count": {}}}"#, u64::MAX)).unwrap();
        let mut journal = open_in(&tmp);

        assert!(matches!(
            journal.session_filename("x", None, day(2024, 1, 1)),
            Err(AppError::CounterExhausted { .. })
        ));
        let err = journal.create_session(&request("x", day(2024, 1, 1))).unwrap_err();
        assert!(matches!(err, AppError::CounterExhausted { .. }));
        assert!(journal.recent_sessions(5).is_empty());
        assert_eq!(journal.counter().count(), u64::MAX);
    }

    #[test]
    fn custom_template_is_rendered() {
        let tmp = tempfile::tempdir().unwrap();
        let mut journal = open_in(&tmp);
        fs::write(
            journal.layout().templates_dir().join("session-template.md"),
            "[NUMBER] | [TOPIC] | YYYY-MM-DD | [Week N / Phase Name]\n",
        )
        .unwrap();
        let created = journal.create_session(&request("state machines", day(2024, 2, 1))).unwrap();
        assert_eq!(
            fs::read_to_string(created.path).unwrap(),
            "001 | State Machines | 2024-02-01 | [Week N / Phase Name]\n"
        );
    }

    #[test]
    fn failed_write_keeps_counter_advanced() {
        let tmp = tempfile::tempdir().unwrap();
        let mut journal = open_in(&tmp);
        let sessions = journal.layout().sessions_dir();
        fs::remove_dir(&sessions).unwrap();
        fs::write(&sessions, "blocking file").unwrap();

        let err = journal.create_session(&request("x", day(2024, 1, 1))).unwrap_err();
        assert!(matches!(err, AppError::Write { .. }));
        assert_eq!(journal.counter().count(), 1);
    }

    #[test]
    fn weekly_summary_links_matching_sessions() {
        let tmp = tempfile::tempdir().unwrap();
        let mut journal = open_in(&tmp);
        journal.create_session(&request("week-01 setup", day(2024, 1, 15))).unwrap();
        journal.create_session(&request("week-02 combat", day(2024, 1, 22))).unwrap();
        journal.create_session(&request("Week 01 input", day(2024, 1, 16))).unwrap();

        let path = journal.create_weekly_summary(1).unwrap();
        assert_eq!(path.file_name().unwrap(), "week-01-summary.md");
        let content = fs::read_to_string(path).unwrap();
        // "Week 01 input" sanitizes to week-01-input and matches too
        assert!(content.contains("**Sessions Completed**: 2"));
        assert!(content.contains("2024-01-15-session-001-week-01-setup.md"));
        assert!(content.contains("2024-01-16-session-003-week-01-input.md"));
        assert!(!content.contains("week-02-combat"));
        // counter untouched by summaries
        assert_eq!(journal.counter().count(), 3);
    }
}
