//! ZIP extraction with forbidden-character sanitization.
//!
//! # Architecture
//!
//! - `sanitize.rs` - Entry name sanitization and containment
//! - `extract.rs` - Extraction pipeline
//! - `extract/` - Per-format entry sources
//! - `entry.rs` - Extracted entry and report types

pub use entry::{ArchiveReport, Entry, EntryKind};
pub use error::{Error, Result};
pub use extract::{EntrySource, PendingEntry, ZipSource, extract, extract_archive, extract_from_reader};
pub use sanitize::{FORBIDDEN_CHARS, REPLACEMENT, SanitizedPath, sanitize_name, sanitize_path};

pub mod entry;
mod error;
pub mod extract;
mod sanitize;
