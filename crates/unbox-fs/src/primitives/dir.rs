use std::fs;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Create `path` and all missing ancestors.
///
/// Succeeds when the directory already exists, so it can be called
/// repeatedly on the same path.
pub fn ensure_dir(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if path.is_dir() {
        return Ok(());
    }

    fs::create_dir_all(path).map_err(|e| Error::CreateDir {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::debug!(path = %path.display(), "created directory");
    Ok(())
}

/// Ensure the parent directory of `path` exists.
///
/// A path without a parent component (e.g. a bare file name) is a no-op.
pub fn ensure_parent(path: impl AsRef<Path>) -> Result<()> {
    match path.as_ref().parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_dir(parent),
        _ => Ok(()),
    }
}

/// List the immediate children of `path`, sorted by file name.
pub fn read_dir_sorted(path: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let path = path.as_ref();
    let read_err = |e| Error::Read {
        path: path.to_path_buf(),
        source: e,
    };

    let mut children = fs::read_dir(path)
        .map_err(read_err)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(read_err)?;

    children.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(children)
}
