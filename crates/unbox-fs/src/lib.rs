//! Filesystem primitives shared by the extractor and the reporter.
//!
//! Every operation opens and releases its own handles; nothing is held
//! between calls.

mod error;
pub mod primitives;

pub use error::{Error, Result};
pub use primitives::{ensure_dir, ensure_parent, file_size, read_dir_sorted, write_bytes};
