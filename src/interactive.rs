//! Prompt-driven session creation
//!
//! Shows some project context (git state, recent sessions), asks for the
//! session details and creates the file. Input and output are injected so the
//! whole conversation can be driven from tests.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::consts::{INTERACTIVE_COMMIT_COUNT, INTERACTIVE_LIST_LIMIT};
use crate::error::AppError;
use crate::journal::{CreatedSession, Journal, SessionRequest, format_ordinal};
use crate::vcs;

/// Context lines printed before the prompts
#[derive(Debug, Default)]
pub(crate) struct ProjectContext {
    pub(crate) changes: Option<Vec<String>>,
    pub(crate) commits: Vec<String>,
    pub(crate) recent_sessions: Vec<String>,
}

impl ProjectContext {
    pub(crate) fn gather(project_root: &Path, journal: &Journal) -> Self {
        Self {
            changes: vcs::working_tree_changes(project_root),
            commits: vcs::recent_commits(project_root, INTERACTIVE_COMMIT_COUNT),
            recent_sessions: journal.recent_sessions(INTERACTIVE_LIST_LIMIT),
        }
    }
}

pub(crate) struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub(crate) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` and read one trimmed line; EOF reads as empty.
    fn ask(&mut self, prompt: &str) -> Result<String, AppError> {
        write!(self.output, "{prompt}").map_err(AppError::Terminal)?;
        self.output.flush().map_err(AppError::Terminal)?;
        let mut line = String::new();
        self.input.read_line(&mut line).map_err(AppError::Terminal)?;
        Ok(line.trim().to_string())
    }

    fn say(&mut self, text: &str) -> Result<(), AppError> {
        writeln!(self.output, "{text}").map_err(AppError::Terminal)
    }

    fn show_context(&mut self, context: &ProjectContext) -> Result<(), AppError> {
        self.say("=== Session Log - Interactive Mode ===\n")?;
        self.say("Current project status:")?;
        match &context.changes {
            Some(changes) => {
                self.say("Modified files:")?;
                for line in changes {
                    self.say(&format!("  {line}"))?;
                }
            }
            None => self.say("  No modified files")?,
        }

        self.say("")?;
        if !context.commits.is_empty() {
            self.say("Recent commits:")?;
            for commit in &context.commits {
                self.say(&format!("  {commit}"))?;
            }
        }

        self.say("")?;
        self.say("Recent sessions:")?;
        if context.recent_sessions.is_empty() {
            self.say("  No sessions found.")?;
        }
        for (index, file) in context.recent_sessions.iter().enumerate() {
            self.say(&format!("  {}. {file}", index + 1))?;
        }
        Ok(())
    }

    /// Collect topic, phase and focus. `None` when no topic was given.
    fn ask_request(&mut self, date: NaiveDate) -> Result<Option<SessionRequest>, AppError> {
        self.say("\n=== Create New Session ===")?;
        let topic = self.ask("Session topic (e.g., 'player-implementation'): ")?;
        if topic.is_empty() {
            self.say("Topic is required!")?;
            return Ok(None);
        }
        let phase = self.ask("Learning phase (e.g., 'week-01', 'milestone-mvp'): ")?;
        let focus = self.ask("Main learning objective: ")?;

        Ok(Some(SessionRequest {
            topic,
            phase: Some(phase).filter(|p| !p.is_empty()),
            focus: Some(focus).filter(|f| !f.is_empty()),
            date,
        }))
    }

    fn show_next_steps(&mut self, created: &CreatedSession) -> Result<(), AppError> {
        let path = created.path.display();
        self.say(&format!("\nSession file created: {path}"))?;
        self.say(&format!("Session number: {}", format_ordinal(created.number)))?;
        self.say("\nNext steps:")?;
        self.say("1. Copy your chat conversation to clipboard")?;
        self.say(&format!("2. Edit the file: {path}"))?;
        self.say("3. Replace template placeholders with actual content")?;
        self.say("4. Fill in the Key Learnings and Implementation Summary sections")?;
        self.say("5. Run 'git add' and 'git commit' to save your progress")
    }

    /// Run the whole conversation. Returns the created file and whether the
    /// user asked to open it, or `None` if the user gave no topic and
    /// nothing was written.
    pub(crate) fn run(
        &mut self,
        journal: &mut Journal,
        context: &ProjectContext,
        date: NaiveDate,
    ) -> Result<Option<(PathBuf, bool)>, AppError> {
        self.show_context(context)?;
        let Some(request) = self.ask_request(date)? else {
            return Ok(None);
        };
        let created = journal.create_session(&request)?;
        self.show_next_steps(&created)?;

        let answer = self.ask("\nOpen the file now? (y/n): ")?;
        let open = answer.to_lowercase().starts_with('y');
        Ok(Some((created.path, open)))
    }
}
