use std::path::{Path, PathBuf};

/// An archive entry that has been written to disk.
#[derive(Clone, Debug)]
pub struct Entry {
    pub original_name: String,
    pub target_path: Option<PathBuf>,
    pub size: u64,
    pub kind: EntryKind,
}

impl Entry {
    pub fn new(original_name: impl Into<String>, size: u64, kind: EntryKind) -> Self {
        Self {
            original_name: original_name.into(),
            target_path: None,
            size,
            kind,
        }
    }

    pub fn with_target_path(mut self, target_path: PathBuf) -> Self {
        self.target_path = Some(target_path);
        self
    }

    pub fn is_file(&self) -> bool {
        matches!(self.kind, EntryKind::File)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    File,
    /// Zero-length marker whose name ends with a separator.
    Directory,
}

/// Outcome of extracting one archive.
#[derive(Clone, Debug)]
pub struct ArchiveReport {
    pub destination: PathBuf,
    pub entry_count: usize,
    pub total_bytes: u64,
    pub entries: Vec<Entry>,
    /// Raw names of entries that would have landed outside `destination`.
    pub skipped: Vec<String>,
}

impl ArchiveReport {
    pub fn new(destination: impl AsRef<Path>) -> Self {
        Self {
            destination: destination.as_ref().to_path_buf(),
            entry_count: 0,
            total_bytes: 0,
            entries: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: Entry) {
        self.entry_count += 1;
        self.total_bytes += entry.size;
        self.entries.push(entry);
    }

    pub fn files(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| e.is_file())
    }
}
