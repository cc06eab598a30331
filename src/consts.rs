/// Standard date format used in filenames and templates: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Journal root, relative to the project root, when not configured
pub(crate) const DEFAULT_JOURNAL_DIR: &str = "docs/chat-logs";

pub(crate) const SESSIONS_DIR: &str = "sessions";
pub(crate) const SUMMARIES_DIR: &str = "summaries";
pub(crate) const TEMPLATES_DIR: &str = "templates";

/// Counter record, stored in the journal root
pub(crate) const COUNTER_FILE: &str = "session_counter.json";

pub(crate) const DEFAULT_SESSION_TEMPLATE: &str = "session-template.md";

/// Sessions shown by `--list` unless overridden
pub(crate) const DEFAULT_LIST_LIMIT: usize = 10;

/// Sessions shown in the interactive context header
pub(crate) const INTERACTIVE_LIST_LIMIT: usize = 5;

/// Commits shown in the interactive context header
pub(crate) const INTERACTIVE_COMMIT_COUNT: usize = 3;

/// Week used by `--summary` when `--week` is absent
pub(crate) const DEFAULT_WEEK: u32 = 1;
