use std::io;
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::cli::{Action, Cli};
use crate::error::AppError;
use crate::interactive::{ProjectContext, Prompter};
use crate::journal::{Journal, JournalLayout, SessionRequest, format_ordinal};
use crate::output::{output_session_json, print_session_list};
use crate::utils::{Timezone, open_in_editor, parse_date};

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) project_root: PathBuf,
    pub(crate) date: NaiveDate,
}

impl<'a> CommandContext<'a> {
    /// Resolve the project root and the session date from the merged CLI.
    pub(crate) fn new(cli: &'a Cli) -> Result<Self, AppError> {
        let date = match &cli.date {
            Some(raw) => parse_date(raw)?,
            None => Timezone::parse(cli.timezone.as_deref())?.today(),
        };
        Ok(Self {
            cli,
            project_root: cli.project_root(),
            date,
        })
    }

    fn open_journal(&self) -> Result<Journal, AppError> {
        let layout = JournalLayout::for_project(&self.project_root, &self.cli.journal_dir());
        let journal = Journal::open(layout, self.cli.template_name())?;
        log::debug!("journal root {}", journal.layout().root().display());
        Ok(journal)
    }
}

fn handle_create(
    ctx: &CommandContext<'_>,
    topic: String,
    phase: Option<String>,
    focus: Option<String>,
) -> Result<(), AppError> {
    let mut journal = ctx.open_journal()?;
    if ctx.cli.dry_run {
        log::debug!("dry run, counter stays at {}", journal.counter().count());
        println!("{}", journal.session_filename(&topic, None, ctx.date)?);
        return Ok(());
    }
    let created = journal.create_session(&SessionRequest {
        topic,
        phase,
        focus,
        date: ctx.date,
    })?;
    println!("Session file created: {}", created.path.display());
    println!("Session number: {}", format_ordinal(created.number));
    Ok(())
}

fn handle_list(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let journal = ctx.open_journal()?;
    let files = journal.recent_sessions(ctx.cli.list_limit());
    if ctx.cli.json {
        println!("{}", output_session_json(&files));
    } else {
        print_session_list(&files, ctx.cli.use_color());
    }
    Ok(())
}

fn handle_summary(ctx: &CommandContext<'_>, week: u32) -> Result<(), AppError> {
    let journal = ctx.open_journal()?;
    let path = journal.create_weekly_summary(week)?;
    println!("Weekly summary created: {}", path.display());
    Ok(())
}

fn handle_interactive(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let mut journal = ctx.open_journal()?;
    let context = ProjectContext::gather(&ctx.project_root, &journal);

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    let Some((path, open)) = prompter.run(&mut journal, &context, ctx.date)? else {
        return Ok(());
    };

    if open && let Err(e) = open_in_editor(&path) {
        log::warn!("Could not open file automatically: {e}");
        println!("Please open manually: {}", path.display());
    }
    Ok(())
}

/// Run one action. `Action::Help` is handled by the caller.
pub(crate) fn run_action(ctx: &CommandContext<'_>, action: Action) -> Result<(), AppError> {
    match action {
        Action::Interactive => handle_interactive(ctx),
        Action::List => handle_list(ctx),
        Action::Summary { week } => handle_summary(ctx, week),
        Action::Create {
            topic,
            phase,
            focus,
        } => handle_create(ctx, topic, phase, focus),
        Action::Help => Ok(()),
    }
}
