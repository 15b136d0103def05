//! Text reports over a directory tree.
//!
//! Three independent passes, each producing lines ready for display:
//!
//! - [`list_tree`] - recursive listing with sizes, indented by recursion depth
//! - [`summarize`] - file count and byte total over a full walk
//! - [`list_structure`] - bounded per-directory listing, indented by separator count
//!
//! None of them fail: unreadable directories are rendered inline or skipped.

pub use format::group_thousands;
pub use structure::{MAX_LISTED_FILES, list_structure, separator_level};
pub use summary::{Summary, summarize};
pub use tree::{depth_indent, list_tree};

mod format;
mod structure;
mod summary;
mod tree;

/// One indentation step.
pub const INDENT: &str = "  ";
