//! CLI argument definitions
//!
//! Flags for creating, listing and summarizing sessions, plus the merge
//! with values from the config file.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::Config;
use crate::consts::{DEFAULT_JOURNAL_DIR, DEFAULT_LIST_LIMIT, DEFAULT_SESSION_TEMPLATE};

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "sessionlog")]
#[command(
    about = "Create numbered session logs and weekly summaries for a learning journal",
    version
)]
#[command(after_help = "Examples:
  sessionlog --interactive
  sessionlog --topic \"player-implementation\" --phase \"week-01\"
  sessionlog --summary --week 1
  sessionlog --list")]
pub(crate) struct Cli {
    /// Session topic
    #[arg(long, value_name = "TOPIC")]
    pub(crate) topic: Option<String>,

    /// Print the filename the session would get without writing anything
    #[arg(long, requires = "topic")]
    pub(crate) dry_run: bool,

    /// Learning phase (e.g., week-01)
    #[arg(long, value_name = "PHASE")]
    pub(crate) phase: Option<String>,

    /// Main learning objective
    #[arg(long, value_name = "FOCUS")]
    pub(crate) focus: Option<String>,

    /// Interactive mode
    #[arg(short, long)]
    pub(crate) interactive: bool,

    /// List recent sessions
    #[arg(short, long)]
    pub(crate) list: bool,

    /// Create weekly summary
    #[arg(long)]
    pub(crate) summary: bool,

    /// Week number for summary
    #[arg(long, value_name = "NUMBER", value_parser = clap::value_parser!(u32).range(1..))]
    pub(crate) week: Option<u32>,

    /// Project root directory (default: current directory)
    #[arg(long, value_name = "PATH")]
    pub(crate) project_root: Option<PathBuf>,

    /// Journal directory relative to the project root
    #[arg(long, value_name = "PATH")]
    pub(crate) journal_dir: Option<PathBuf>,

    /// Session template filename inside the templates directory
    #[arg(long, value_name = "NAME")]
    pub(crate) template: Option<String>,

    /// Session date instead of today (YYYYMMDD or YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub(crate) date: Option<String>,

    /// Timezone that decides today's date (e.g., "UTC", "Europe/Berlin")
    #[arg(long, value_name = "TZ")]
    pub(crate) timezone: Option<String>,

    /// Number of sessions shown by --list
    #[arg(long, value_name = "N")]
    pub(crate) limit: Option<usize>,

    /// Print --list output as JSON
    #[arg(short, long)]
    pub(crate) json: bool,

    /// Color output mode
    #[arg(long, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long)]
    pub(crate) no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.debug && config.debug {
            self.debug = true;
        }
        if !self.no_color && config.no_color {
            self.no_color = true;
        }

        if self.project_root.is_none() {
            self.project_root = config.project_root.clone();
        }
        if self.journal_dir.is_none() {
            self.journal_dir = config.journal_dir.clone();
        }
        if self.template.is_none() {
            self.template = config.template.clone();
        }
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }
        if self.limit.is_none() {
            self.limit = config.list_limit;
        }

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }

    /// Project root, falling back to the working directory
    pub(crate) fn project_root(&self) -> PathBuf {
        self.project_root
            .clone()
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub(crate) fn journal_dir(&self) -> PathBuf {
        self.journal_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_JOURNAL_DIR))
    }

    pub(crate) fn template_name(&self) -> &str {
        self.template.as_deref().unwrap_or(DEFAULT_SESSION_TEMPLATE)
    }

    pub(crate) fn list_limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_LIST_LIMIT)
    }
}
