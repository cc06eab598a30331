//! Action selection
//!
//! The CLI is flag-driven; this module decides which single action a set of
//! flags asks for.

use crate::consts::DEFAULT_WEEK;

use super::args::Cli;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Action {
    Interactive,
    List,
    Summary {
        week: u32,
    },
    Create {
        topic: String,
        phase: Option<String>,
        focus: Option<String>,
    },
    Help,
}

/// Pick the action for `cli`.
///
/// Precedence: interactive, list, summary, topic. Anything else, including a
/// blank `--topic`, shows help.
pub(crate) fn parse_action(cli: &Cli) -> Action {
    if cli.interactive {
        return Action::Interactive;
    }
    if cli.list {
        return Action::List;
    }
    if cli.summary {
        return Action::Summary {
            week: cli.week.unwrap_or(DEFAULT_WEEK),
        };
    }
    match cli.topic.as_ref().filter(|t| !t.trim().is_empty()) {
        Some(topic) => Action::Create {
            topic: topic.clone(),
            phase: cli.phase.clone().filter(|p| !p.is_empty()),
            focus: cli.focus.clone().filter(|f| !f.is_empty()),
        },
        None => Action::Help,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn action(args: &[&str]) -> Action {
        let mut argv = vec!["sessionlog"];
        argv.extend_from_slice(args);
        parse_action(&Cli::try_parse_from(argv).unwrap())
    }

    #[test]
    fn no_flags_shows_help() {
        assert_eq!(action(&[]), Action::Help);
        assert_eq!(action(&["--phase", "week-01"]), Action::Help);
    }

    #[test]
    fn interactive_wins_over_everything() {
        assert_eq!(action(&["-i", "-l", "--topic", "x"]), Action::Interactive);
    }

    #[test]
    fn list_beats_summary() {
        assert_eq!(action(&["--summary", "--list"]), Action::List);
    }

    #[test]
    fn summary_defaults_to_week_one() {
        assert_eq!(action(&["--summary"]), Action::Summary { week: 1 });
        assert_eq!(action(&["--summary", "--week", "4"]), Action::Summary { week: 4 });
    }

    #[test]
    fn blank_topic_shows_help() {
        assert_eq!(action(&["--topic", ""]), Action::Help);
        assert_eq!(action(&["--topic", "   ", "--phase", "week-01"]), Action::Help);
    }

    #[test]
    fn topic_creates_session() {
        assert_eq!(
            action(&[
                "--topic",
                "Player Implementation",
                "--phase",
                "week-01",
                "--focus",
                "",
            ]),
            Action::Create {
                topic: "Player Implementation".to_string(),
                phase: Some("week-01".to_string()),
                focus: None,
            }
        );
    }
}
