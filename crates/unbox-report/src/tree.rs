use std::path::Path;

use crate::INDENT;
use crate::format::group_thousands;

/// Indentation for a node at recursion `depth`.
pub fn depth_indent(depth: usize) -> String {
    INDENT.repeat(depth)
}

/// Depth-first, pre-order listing of `root` with file sizes.
///
/// Children are visited in name order. A directory that cannot be read
/// produces one diagnostic line at its depth and its remaining children are
/// not listed; its siblings and ancestors still are. A `root` that is a
/// regular file yields no lines.
pub fn list_tree(root: impl AsRef<Path>) -> Vec<String> {
    let root = root.as_ref();
    let mut lines = Vec::new();
    if root.is_file() {
        return lines;
    }

    list_into(root, 0, &mut lines);
    lines
}

fn list_into(dir: &Path, depth: usize, lines: &mut Vec<String>) {
    let indent = depth_indent(depth);

    if let Err(err) = list_children(dir, depth, &indent, lines) {
        tracing::debug!(dir = %dir.display(), error = %err, "listing stopped");
        if err.is_permission_denied() {
            lines.push(format!("{indent}❌ Permission denied"));
        } else {
            lines.push(format!("{indent}❌ Error: {err}"));
        }
    }
}

fn list_children(
    dir: &Path,
    depth: usize,
    indent: &str,
    lines: &mut Vec<String>,
) -> unbox_fs::Result<()> {
    for child in unbox_fs::read_dir_sorted(dir)? {
        let name = child
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        if child.is_dir() {
            lines.push(format!("{indent}📁 {name}/"));
            list_into(&child, depth + 1, lines);
        } else {
            let size = unbox_fs::file_size(&child)?;
            lines.push(format!("{indent}📄 {name} ({} bytes)", group_thousands(size)));
        }
    }
    Ok(())
}
