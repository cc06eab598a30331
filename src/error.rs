use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid date \"{input}\" (expected YYYYMMDD or YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Session counter is at {count} and cannot be incremented")]
    CounterExhausted { count: u64 },

    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to encode session counter: {0}")]
    EncodeCounter(#[from] serde_json::Error),

    #[error("Terminal I/O failed: {0}")]
    Terminal(std::io::Error),
}

#[derive(Debug, Error)]
pub(crate) enum GitError {
    #[error("git not found")]
    NotFound,

    #[error("Failed to run git: {0}")]
    Spawn(std::io::Error),

    #[error("Invalid UTF-8 from git: {0}")]
    Utf8(std::string::FromUtf8Error),

    #[error("git error: {0}")]
    Command(String),
}

#[derive(Debug, Error)]
pub(crate) enum OpenError {
    #[error("No file opener known for platform \"{0}\"")]
    UnsupportedPlatform(&'static str),

    #[error("Failed to launch {program}: {source}")]
    Spawn {
        program: &'static str,
        source: std::io::Error,
    },

    #[error("{program} exited with {status}")]
    Status {
        program: &'static str,
        status: std::process::ExitStatus,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_error_display_date() {
        let e = AppError::InvalidDate {
            input: "abc".to_string(),
        };
        assert_eq!(
            e.to_string(),
            r#"Invalid date "abc" (expected YYYYMMDD or YYYY-MM-DD)"#
        );
    }

    #[test]
    fn app_error_display_timezone() {
        let e = AppError::InvalidTimezone {
            input: "Mars/Olympus".to_string(),
        };
        assert_eq!(e.to_string(), "Invalid timezone: Mars/Olympus");
    }

    #[test]
    fn app_error_display_counter_exhausted() {
        let e = AppError::CounterExhausted { count: 7 };
        assert_eq!(e.to_string(), "Session counter is at 7 and cannot be incremented");
    }

    #[test]
    fn app_error_display_write_includes_path() {
        let e = AppError::Write {
            path: PathBuf::from("/tmp/journal/sessions/x.md"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = e.to_string();
        assert!(msg.starts_with("Failed to write /tmp/journal/sessions/x.md"));
        assert!(msg.ends_with("denied"));
    }

    #[test]
    fn git_error_command() {
        let e = GitError::Command("not a git repository".to_string());
        assert_eq!(e.to_string(), "git error: not a git repository");
    }

    #[test]
    fn open_error_unsupported_platform() {
        assert_eq!(
            OpenError::UnsupportedPlatform("plan9").to_string(),
            r#"No file opener known for platform "plan9""#
        );
    }
}
