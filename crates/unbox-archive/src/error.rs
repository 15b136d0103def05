use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot open archive '{path}': {source}")]
    ArchiveOpen { path: PathBuf, source: io::Error },

    #[error("invalid or corrupt archive: {0}")]
    ArchiveRead(#[source] zip::result::ZipError),

    #[error("failed to read entry '{entry}': {source}")]
    EntryRead { entry: String, source: io::Error },

    #[error("entry '{entry}' resolves outside the target directory")]
    PathEscape { entry: String },

    #[error(transparent)]
    Filesystem(#[from] unbox_fs::Error),
}

impl Error {
    /// True when the archive itself (rather than the destination) is at fault.
    pub fn is_archive_failure(&self) -> bool {
        matches!(
            self,
            Self::ArchiveOpen { .. } | Self::ArchiveRead(_) | Self::EntryRead { .. }
        )
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(e: zip::result::ZipError) -> Self {
        Self::ArchiveRead(e)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
