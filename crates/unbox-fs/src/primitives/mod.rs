pub mod dir;
pub mod rw;

pub use dir::{ensure_dir, ensure_parent, read_dir_sorted};
pub use rw::{file_size, write_bytes};
