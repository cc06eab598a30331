use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::error::AppError;

/// Write `content` to a sibling temp file, sync it, then rename it over `path`.
pub(crate) fn write_atomic(path: &Path, content: &str) -> Result<(), AppError> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
        .unwrap_or("record");
    let temp_path = parent.join(format!(".{}.{}.tmp", file_name, std::process::id()));

    let write_err = |source| AppError::Write {
        path: path.to_path_buf(),
        source,
    };

    let result = File::create(&temp_path)
        .and_then(|mut file| {
            file.write_all(content.as_bytes())?;
            file.sync_all()
        })
        .and_then(|()| fs::rename(&temp_path, path));

    if let Err(source) = result {
        let _ = fs::remove_file(&temp_path);
        return Err(write_err(source));
    }
    Ok(())
}

/// Plain overwrite, used for generated markdown
pub(crate) fn write_file(path: &Path, content: &str) -> Result<(), AppError> {
    fs::write(path, content).map_err(|source| AppError::Write {
        path: path.to_path_buf(),
        source,
    })
}
