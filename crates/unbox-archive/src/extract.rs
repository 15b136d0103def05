//! Sequential extraction of archive entries into a target directory.
//!
//! Entries are written one at a time in the order the source yields them.
//! There is no rollback: when an entry fails, everything written before it
//! stays on disk and the remaining entries are not attempted.

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use crate::entry::{ArchiveReport, Entry, EntryKind};
use crate::error::{Error, Result};
use crate::sanitize::sanitize_path;

mod zip;

pub use zip::ZipSource;

/// An entry read from the archive but not yet written.
pub struct PendingEntry {
    /// Raw name as stored in the archive.
    pub name: String,
    pub size: u64,
    pub kind: EntryKind,
    pub content: Vec<u8>,
}

/// Archive-specific entry source.
pub trait EntrySource {
    fn next_entry(&mut self) -> Option<Result<PendingEntry>>;
}

/// Main extraction pipeline.
///
/// Sanitizes each entry name, ensures its parent directory, then writes the
/// payload. Entries resolving outside `destination` are skipped and listed in
/// [`ArchiveReport::skipped`].
pub fn extract<S: EntrySource>(
    source: &mut S,
    destination: impl AsRef<Path>,
) -> Result<ArchiveReport> {
    let destination = destination.as_ref();
    let mut report = ArchiveReport::new(destination);

    while let Some(pending) = source.next_entry() {
        let pending = pending?;

        let sanitized = match sanitize_path(&pending.name, destination) {
            Ok(sanitized) => sanitized,
            Err(Error::PathEscape { entry }) => {
                tracing::warn!(entry = %entry, "skipping entry outside the target directory");
                report.skipped.push(entry);
                continue;
            }
            Err(e) => return Err(e),
        };

        write_entry(&pending, &sanitized.resolved)?;
        tracing::debug!(
            entry = %pending.name,
            target = %sanitized.resolved.display(),
            bytes = pending.size,
            "extracted entry"
        );

        report.push(
            Entry::new(pending.name, pending.size, pending.kind)
                .with_target_path(sanitized.resolved),
        );
    }

    Ok(report)
}

fn write_entry(pending: &PendingEntry, target_path: &Path) -> Result<()> {
    match pending.kind {
        EntryKind::File => {
            unbox_fs::ensure_parent(target_path)?;
            unbox_fs::write_bytes(target_path, &pending.content)?;
        }
        EntryKind::Directory => unbox_fs::ensure_dir(target_path)?,
    }
    Ok(())
}

/// Extract a ZIP archive read from `reader` into `destination`.
///
/// `destination` is created first, so it exists even when the reader does
/// not hold a valid archive.
pub fn extract_from_reader<R: Read + Seek>(
    reader: R,
    destination: impl AsRef<Path>,
) -> Result<ArchiveReport> {
    let destination = destination.as_ref();
    unbox_fs::ensure_dir(destination)?;

    let mut source = ZipSource::new(reader)?;
    extract(&mut source, destination)
}

/// Extract the ZIP archive at `archive_path` into `destination`.
pub fn extract_archive(
    archive_path: impl AsRef<Path>,
    destination: impl AsRef<Path>,
) -> Result<ArchiveReport> {
    let archive_path = archive_path.as_ref();
    let destination = destination.as_ref();
    unbox_fs::ensure_dir(destination)?;

    let file = File::open(archive_path).map_err(|e| Error::ArchiveOpen {
        path: archive_path.to_path_buf(),
        source: e,
    })?;
    let report = extract_from_reader(BufReader::new(file), destination)?;

    tracing::info!(
        archive = %archive_path.display(),
        entries = report.entry_count,
        bytes = report.total_bytes,
        skipped = report.skipped.len(),
        "archive extracted"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::io::Cursor;

    use super::*;

    /// In-memory source that can fail after a number of entries.
    struct ScriptedSource {
        entries: VecDeque<Result<PendingEntry>>,
    }

    impl ScriptedSource {
        fn new(entries: Vec<Result<PendingEntry>>) -> Self {
            Self {
                entries: entries.into(),
            }
        }
    }

    impl EntrySource for ScriptedSource {
        fn next_entry(&mut self) -> Option<Result<PendingEntry>> {
            self.entries.pop_front()
        }
    }

    fn file(name: &str, content: &[u8]) -> Result<PendingEntry> {
        Ok(PendingEntry {
            name: name.to_string(),
            size: content.len() as u64,
            kind: EntryKind::File,
            content: content.to_vec(),
        })
    }

    fn dir(name: &str) -> Result<PendingEntry> {
        Ok(PendingEntry {
            name: name.to_string(),
            size: 0,
            kind: EntryKind::Directory,
            content: Vec::new(),
        })
    }

    #[test]
    fn extract_from_reader_invalid_format() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dest = temp_dir.path().join("dest");
        let result = extract_from_reader(Cursor::new([0xDE, 0xAD, 0xBE, 0xEF]), &dest);
        assert!(matches!(result, Err(Error::ArchiveRead(_))));
        assert!(dest.is_dir(), "target directory is created before the archive is read");
    }

    #[test]
    fn writes_sanitized_files() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut source = ScriptedSource::new(vec![
            file("a.txt", b"hey"),
            file("odd<dir>/x|y.txt", b"12"),
        ]);

        let report = extract(&mut source, temp_dir.path()).unwrap();

        assert_eq!(report.entry_count, 2);
        assert_eq!(report.total_bytes, 5);
        assert_eq!(std::fs::read(temp_dir.path().join("a.txt")).unwrap(), b"hey");
        assert_eq!(
            std::fs::read(temp_dir.path().join("odd_dir_/x_y.txt")).unwrap(),
            b"12"
        );
    }

    #[test]
    fn directory_markers_create_directories() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut source = ScriptedSource::new(vec![dir("empty/"), dir("nested/deeper/")]);

        let report = extract(&mut source, temp_dir.path()).unwrap();

        assert_eq!(report.entry_count, 2);
        assert!(temp_dir.path().join("empty").is_dir());
        assert!(temp_dir.path().join("nested/deeper").is_dir());
        assert_eq!(report.files().count(), 0);
    }

    #[test]
    fn colliding_names_last_write_wins() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut source = ScriptedSource::new(vec![file("a:b.txt", b"first"), file("a?b.txt", b"second")]);

        extract(&mut source, temp_dir.path()).unwrap();

        assert_eq!(std::fs::read(temp_dir.path().join("a_b.txt")).unwrap(), b"second");
    }

    #[test]
    fn escaping_entries_are_skipped() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dest = temp_dir.path().join("dest");
        std::fs::create_dir(&dest).unwrap();
        let mut source = ScriptedSource::new(vec![file("../evil.txt", b"x"), file("ok.txt", b"y")]);

        let report = extract(&mut source, &dest).unwrap();

        assert_eq!(report.skipped, vec!["../evil.txt".to_string()]);
        assert_eq!(report.entry_count, 1);
        assert!(!temp_dir.path().join("evil.txt").exists());
        assert!(dest.join("ok.txt").is_file());
    }

    #[test]
    fn failure_keeps_earlier_files_and_stops() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut source = ScriptedSource::new(vec![
            file("first.txt", b"1"),
            Err(Error::EntryRead {
                entry: "broken.bin".to_string(),
                source: std::io::Error::other("bad crc"),
            }),
            file("never.txt", b"3"),
        ]);

        let result = extract(&mut source, temp_dir.path());

        assert!(matches!(result, Err(Error::EntryRead { .. })));
        assert!(temp_dir.path().join("first.txt").is_file());
        assert!(!temp_dir.path().join("never.txt").exists());
    }

    #[test]
    fn file_blocked_by_existing_file_is_filesystem_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join("sub"), b"not a dir").unwrap();
        let mut source = ScriptedSource::new(vec![file("sub/inner.txt", b"x")]);

        let result = extract(&mut source, temp_dir.path());

        assert!(matches!(result, Err(Error::Filesystem(_))));
    }

    #[test]
    fn missing_archive_is_open_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = extract_archive(temp_dir.path().join("nope.zip"), temp_dir.path().join("nope"));
        let err = result.unwrap_err();
        assert!(matches!(err, Error::ArchiveOpen { .. }));
        assert!(err.is_archive_failure());
    }
}
