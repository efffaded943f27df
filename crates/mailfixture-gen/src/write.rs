use crate::error::{GenError, Result};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Replaces `path` with `contents`. The data goes to a sibling temp file
/// first, so the destination is either the old file or the complete new one.
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    let write_err = |source| GenError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
    }

    let temp = temp_path(path).ok_or_else(|| {
        write_err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "output path has no file name",
        ))
    })?;
    fs::write(&temp, contents).map_err(write_err)?;
    if let Err(source) = fs::rename(&temp, path) {
        let _ = fs::remove_file(&temp);
        return Err(write_err(source));
    }
    debug!(path = %path.display(), bytes = contents.len(), "output written");
    Ok(())
}

fn temp_path(path: &Path) -> Option<PathBuf> {
    let file_name = path.file_name()?;
    let mut temp_name = OsString::from(".");
    temp_name.push(file_name);
    temp_name.push(".tmp");
    Some(path.with_file_name(temp_name))
}
