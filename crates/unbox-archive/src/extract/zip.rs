use std::io::{Read, Seek};

use crate::entry::EntryKind;
use crate::error::{Error, Result};
use crate::extract::{EntrySource, PendingEntry};

/// Entry source over a ZIP central directory, in its stored order.
pub struct ZipSource<R: Read + Seek> {
    archive: zip::ZipArchive<R>,
    index: usize,
}

impl<R: Read + Seek> ZipSource<R> {
    pub fn new(reader: R) -> Result<Self> {
        let archive = zip::ZipArchive::new(reader).map_err(Error::ArchiveRead)?;
        Ok(Self { archive, index: 0 })
    }
}

impl<R: Read + Seek> EntrySource for ZipSource<R> {
    fn next_entry(&mut self) -> Option<Result<PendingEntry>> {
        if self.index >= self.archive.len() {
            return None;
        }

        let mut file = match self.archive.by_index(self.index) {
            Ok(f) => f,
            Err(e) => return Some(Err(Error::ArchiveRead(e))),
        };
        self.index += 1;

        let name = file.name().to_string();
        let kind = if file.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };

        let mut content = Vec::new();
        if let Err(e) = file.read_to_end(&mut content) {
            return Some(Err(Error::EntryRead {
                entry: name,
                source: e,
            }));
        }

        Some(Ok(PendingEntry {
            name,
            size: content.len() as u64,
            kind,
            content,
        }))
    }
}
