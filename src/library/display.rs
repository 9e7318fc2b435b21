use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::model::{FileSystemNode, NodeKind};

/// One visible line of the folder tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    pub depth: usize,
    pub name: String,
    pub path: PathBuf,
    pub kind: NodeKind,
    pub expanded: bool,
}

impl Row {
    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }
}

/// Flatten `root` in pre-order, descending only into expanded folders.
///
/// The root's own children are always shown.
pub fn visible_rows(root: &FileSystemNode, expanded: &HashSet<PathBuf>) -> Vec<Row> {
    let mut rows = Vec::new();
    push_rows(root, 0, expanded, &mut rows);
    rows
}

fn push_rows(
    node: &FileSystemNode,
    depth: usize,
    expanded: &HashSet<PathBuf>,
    rows: &mut Vec<Row>,
) {
    let open = node.is_folder() && (depth == 0 || expanded.contains(&node.path));
    rows.push(Row {
        depth,
        name: node.name.clone(),
        path: node.path.clone(),
        kind: node.kind,
        expanded: open,
    });
    if open {
        for child in &node.children {
            push_rows(child, depth + 1, expanded, rows);
        }
    }
}

/// Every folder path in the subtree, used to expand everything at once.
pub fn folder_paths(root: &FileSystemNode) -> HashSet<PathBuf> {
    let mut out = HashSet::new();
    collect_folders(root, &mut out);
    out
}

fn collect_folders(node: &FileSystemNode, out: &mut HashSet<PathBuf>) {
    if node.is_folder() {
        out.insert(node.path.clone());
        for child in &node.children {
            collect_folders(child, out);
        }
    }
}

/// The file stem shown as "selected file" and used for auto-parse.
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
