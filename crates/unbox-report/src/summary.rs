use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::format::group_thousands;

const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

/// File count and byte total of a tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub total_files: u64,
    pub total_size: u64,
}

impl Summary {
    pub fn add_file(self, size: u64) -> Self {
        Self {
            total_files: self.total_files + 1,
            total_size: self.total_size + size,
        }
    }

    pub fn mebibytes(&self) -> f64 {
        self.total_size as f64 / BYTES_PER_MIB
    }

    pub fn lines(&self) -> Vec<String> {
        vec![
            format!(
                "  📄 Total files extracted: {}",
                group_thousands(self.total_files)
            ),
            format!(
                "  💾 Total size: {} bytes ({:.2} MB)",
                group_thousands(self.total_size),
                self.mebibytes()
            ),
        ]
    }
}

/// Count every non-directory entry below `root` and sum its size.
///
/// Unreadable directories are skipped, as are entries whose size cannot be
/// looked up (e.g. dangling symlinks or files removed mid-walk). Symlinks to
/// directories are neither followed nor counted.
pub fn summarize(root: impl AsRef<Path>) -> Summary {
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::debug!(error = %err, "skipping unreadable walk entry");
                None
            }
        })
        .filter(|entry| !entry.file_type().is_dir())
        .filter_map(|entry| fs::metadata(entry.path()).ok())
        .filter(|meta| !meta.is_dir())
        .fold(Summary::default(), |summary, meta| summary.add_file(meta.len()))
}
