use std::cmp::Ordering;
use std::fs;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::INDENT;

/// Files shown per directory before the listing is truncated.
pub const MAX_LISTED_FILES: usize = 10;

/// Nesting level of `dir` below `root`, counted as the path separators left
/// once the textual `root` prefix is removed.
///
/// Computed on the path text rather than its components: a `root` spelled
/// with a trailing separator yields one level less.
pub fn separator_level(root: &Path, dir: &Path) -> usize {
    let root = root.to_string_lossy();
    let dir = dir.to_string_lossy();
    dir.strip_prefix(root.as_ref())
        .unwrap_or(&dir)
        .matches(MAIN_SEPARATOR)
        .count()
}

struct DirGroup {
    path: PathBuf,
    files: Vec<String>,
}

impl DirGroup {
    fn render(&self, root: &Path, lines: &mut Vec<String>) {
        let level = separator_level(root, &self.path);
        let indent = INDENT.repeat(level);
        let subindent = INDENT.repeat(level + 1);
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string());

        lines.push(format!("{indent}📁 {name}/"));
        for file in self.files.iter().take(MAX_LISTED_FILES) {
            lines.push(format!("{subindent}📄 {file}"));
        }
        if self.files.len() > MAX_LISTED_FILES {
            lines.push(format!(
                "{subindent}... and {} more files",
                self.files.len() - MAX_LISTED_FILES
            ));
        }
    }
}

/// Files sort before directories, then by name, so each directory's files are
/// yielded right after the directory itself.
fn files_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

fn is_listed_file(entry: &DirEntry) -> bool {
    if entry.path_is_symlink() {
        return !fs::metadata(entry.path()).is_ok_and(|m| m.is_dir());
    }
    !entry.file_type().is_dir()
}

/// Top-down listing of every directory under `root` with up to
/// [`MAX_LISTED_FILES`] of its files.
///
/// Directories that cannot be read are left out entirely.
pub fn list_structure(root: impl AsRef<Path>) -> Vec<String> {
    let root = root.as_ref();
    let mut groups: Vec<DirGroup> = Vec::new();

    for entry in WalkDir::new(root).sort_by(files_first) {
        match entry {
            Ok(entry) if entry.file_type().is_dir() => groups.push(DirGroup {
                path: entry.into_path(),
                files: Vec::new(),
            }),
            Ok(entry) if is_listed_file(&entry) => {
                if let Some(group) = groups.last_mut() {
                    group
                        .files
                        .push(entry.file_name().to_string_lossy().into_owned());
                }
            }
            Ok(_) => {}
            Err(err) => {
                tracing::debug!(error = %err, "skipping unreadable walk entry");
                let unreadable = groups
                    .last()
                    .is_some_and(|g| g.files.is_empty() && err.path() == Some(g.path.as_path()));
                if unreadable {
                    groups.pop();
                }
            }
        }
    }

    let mut lines = Vec::new();
    for group in &groups {
        group.render(root, &mut lines);
    }
    lines
}
