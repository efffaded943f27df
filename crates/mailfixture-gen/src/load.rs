use crate::error::{GenError, Result};
use mailfixture_core::RawRecord;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const FIXTURE_EXTENSION: &str = "json";

/// Lists the `*.json` files directly inside `dir`, sorted by path. Hidden
/// files are skipped.
pub fn discover(dir: &Path) -> Result<Vec<PathBuf>> {
    let read_dir_err = |source| GenError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        let path = entry.map_err(read_dir_err)?.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some(FIXTURE_EXTENSION) {
            continue;
        }
        if is_hidden(&path) {
            continue;
        }
        if !path.is_file() {
            continue;
        }
        paths.push(path);
    }
    paths.sort();
    debug!(dir = %dir.display(), count = paths.len(), "fixture files discovered");
    Ok(paths)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

pub fn load_file(path: &Path) -> Result<Vec<RawRecord>> {
    let data = fs::read_to_string(path).map_err(|source| GenError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<RawRecord> =
        serde_json::from_str(&data).map_err(|source| GenError::ParseFile {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(path = %path.display(), records = records.len(), "fixture file loaded");
    Ok(records)
}

/// Concatenates the records of every file in the given order.
pub fn load_records(paths: &[PathBuf]) -> Result<Vec<RawRecord>> {
    let mut records = Vec::new();
    for path in paths {
        records.extend(load_file(path)?);
    }
    Ok(records)
}
