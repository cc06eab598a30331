use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::OpenError;

/// Program and leading arguments used to open a file on `os`
fn opener_for(os: &'static str) -> Result<(&'static str, &'static [&'static str]), OpenError> {
    match os {
        "macos" => Ok(("open", &[])),
        "linux" | "freebsd" | "netbsd" | "openbsd" => Ok(("xdg-open", &[])),
        // `start` is a cmd builtin; the empty string is the window title
        "windows" => Ok(("cmd", &["/C", "start", ""])),
        other => Err(OpenError::UnsupportedPlatform(other)),
    }
}

/// Hand a file to the platform's default application and wait for the launcher
pub(crate) fn open_in_editor(path: &Path) -> Result<(), OpenError> {
    let (program, lead) = opener_for(std::env::consts::OS)?;
    let status = Command::new(program)
        .args(lead)
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|source| OpenError::Spawn { program, source })?;

    if status.success() {
        Ok(())
    } else {
        Err(OpenError::Status { program, status })
    }
}
