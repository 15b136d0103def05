use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Characters that are rewritten in entry names before they touch the disk.
pub const FORBIDDEN_CHARS: [char; 6] = [':', '?', '*', '<', '>', '|'];

pub const REPLACEMENT: char = '_';

/// Replace every forbidden character in `raw` with [`REPLACEMENT`].
///
/// Operates on the whole name, directory components included. Every other
/// character keeps its position, so the output has the same number of chars
/// as the input.
pub fn sanitize_name(raw: &str) -> String {
    raw.chars()
        .map(|c| if FORBIDDEN_CHARS.contains(&c) { REPLACEMENT } else { c })
        .collect()
}

/// Result of sanitizing an archive entry name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SanitizedPath {
    pub original: String,
    pub sanitized: String,
    pub resolved: PathBuf,
}

/// Sanitize `entry_name` and resolve it under `base`.
///
/// Fails with [`Error::PathEscape`] when the sanitized name is absolute or
/// climbs above `base` through `..` components.
pub fn sanitize_path(entry_name: &str, base: impl AsRef<Path>) -> Result<SanitizedPath> {
    let sanitized = sanitize_name(entry_name);
    let relative = normalize_relative(Path::new(&sanitized)).ok_or_else(|| Error::PathEscape {
        entry: entry_name.to_string(),
    })?;

    Ok(SanitizedPath {
        original: entry_name.to_string(),
        resolved: base.as_ref().join(relative),
        sanitized,
    })
}

/// Resolve `.` and `..` lexically; `None` if the path leaves its root.
fn normalize_relative(path: &Path) -> Option<PathBuf> {
    let mut result = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Normal(part) => result.push(part),
            Component::CurDir => {}
            Component::ParentDir => {
                if !result.pop() {
                    return None;
                }
            }
            Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    Some(result)
}
