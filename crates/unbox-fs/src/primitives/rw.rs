use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::{Error, Result};

/// Create or truncate `path` and write `content` to it.
///
/// The file handle is dropped before returning.
pub fn write_bytes(path: impl AsRef<Path>, content: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let write_err = |e| Error::Write {
        path: path.to_path_buf(),
        source: e,
    };

    let mut file = File::create(path).map_err(write_err)?;
    file.write_all(content).map_err(write_err)?;
    Ok(())
}

/// Size in bytes of the file at `path`, following symlinks.
pub fn file_size(path: impl AsRef<Path>) -> Result<u64> {
    let path = path.as_ref();
    fs::metadata(path)
        .map(|meta| meta.len())
        .map_err(|e| Error::Read {
            path: path.to_path_buf(),
            source: e,
        })
}
