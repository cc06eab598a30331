//! Session templates and placeholder substitution

use std::fs;
use std::path::Path;

use chrono::NaiveDate;

use super::Loaded;
use super::filename::{format_ordinal, is_word_char};
use crate::utils::format_date;

/// Used when `templates/<name>` cannot be read
pub(crate) const DEFAULT_SESSION_TEMPLATE: &str = r#"# Session [NUMBER]: [TOPIC]

**Date**: YYYY-MM-DD
**Duration**: [estimated duration]
**Focus**: [main learning objective]
**Participants**: Human Developer + AI Assistant

## Session Metadata
- **Learning Phase**: [Week N / Phase Name]
- **Primary Goal**: [what we aimed to accomplish]
- **Technologies**: [languages, engines, tools]
- **Files Modified**: [list of changed files]

## Conversation

### Human
[Paste conversation content here]

### Assistant
[AI responses]

## Key Learnings

### Technical Insights
- [bullet points of new knowledge]

### Development Process
- [workflow and methodology insights]

### Next Steps
- [ ] [immediate follow-up tasks]

## Code Changes
- **Files Added**: [list]
- **Files Modified**: [list]
- **Tests Added**: [list]

## References
- [documentation links]
- [related sessions]
"#;

/// Marker that a template may contain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Placeholder {
    Number,
    Topic,
    Date,
    Phase,
    Focus,
}

impl Placeholder {
    pub(crate) const ALL: [Placeholder; 5] = [
        Placeholder::Number,
        Placeholder::Topic,
        Placeholder::Date,
        Placeholder::Phase,
        Placeholder::Focus,
    ];

    pub(crate) fn token(self) -> &'static str {
        match self {
            Placeholder::Number => "[NUMBER]",
            Placeholder::Topic => "[TOPIC]",
            Placeholder::Date => "YYYY-MM-DD",
            Placeholder::Phase => "[Week N / Phase Name]",
            Placeholder::Focus => "[main learning objective]",
        }
    }
}

/// Values to substitute; `None` leaves the placeholder in place
#[derive(Debug, Clone, Default)]
pub(crate) struct Bindings {
    pub(crate) number: Option<String>,
    pub(crate) topic: Option<String>,
    pub(crate) date: Option<String>,
    pub(crate) phase: Option<String>,
    pub(crate) focus: Option<String>,
}

impl Bindings {
    pub(crate) fn for_session(
        number: u64,
        topic: &str,
        date: NaiveDate,
        phase: Option<&str>,
        focus: Option<&str>,
    ) -> Self {
        Self {
            number: Some(format_ordinal(number)),
            topic: Some(title_case(topic)),
            date: Some(format_date(date)),
            phase: phase.map(str::to_string),
            focus: focus.map(str::to_string),
        }
    }

    pub(crate) fn get(&self, placeholder: Placeholder) -> Option<&str> {
        let value = match placeholder {
            Placeholder::Number => &self.number,
            Placeholder::Topic => &self.topic,
            Placeholder::Date => &self.date,
            Placeholder::Phase => &self.phase,
            Placeholder::Focus => &self.focus,
        };
        value.as_deref()
    }
}

/// Read `dir/name`, or fall back to the built-in session template.
pub(crate) fn load_template(dir: &Path, name: &str) -> Loaded<String> {
    let path = dir.join(name);
    match fs::read_to_string(&path) {
        Ok(content) => Loaded::stored(content),
        Err(e) => {
            log::debug!("template {} not readable ({e}), using built-in", path.display());
            Loaded::defaulted(DEFAULT_SESSION_TEMPLATE.to_string())
        }
    }
}

/// Replace every bound placeholder in one left-to-right pass.
///
/// Substituted text is never rescanned, so a value that happens to contain
/// another token is emitted verbatim.
pub(crate) fn render(template: &str, bindings: &Bindings) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(c) = rest.chars().next() {
        if let Some((value, tail)) = match_bound(rest, bindings) {
            out.push_str(value);
            rest = tail;
            continue;
        }
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }
    out
}

fn match_bound<'a, 'b>(rest: &'a str, bindings: &'b Bindings) -> Option<(&'b str, &'a str)> {
    Placeholder::ALL.into_iter().find_map(|p| {
        let value = bindings.get(p)?;
        let tail = rest.strip_prefix(p.token())?;
        Some((value, tail))
    })
}

/// Capitalize each whitespace-separated token.
///
/// The first word character of a token is upper-cased and everything after
/// it lower-cased; leading punctuation is kept. Hyphens do not start a new
/// token, so "player-implementation" becomes "Player-implementation".
pub(crate) fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_whitespace() {
            in_word = false;
            out.push(c);
        } else if in_word {
            out.extend(c.to_lowercase());
        } else if is_word_char(c) {
            in_word = true;
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}
