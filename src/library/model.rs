use std::path::{Path, PathBuf};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Folder,
    File,
}

/// A folder or qualifying audio file in the scanned tree.
///
/// Only folders have children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileSystemNode {
    pub name: String,
    pub path: PathBuf,
    pub kind: NodeKind,
    pub children: Vec<FileSystemNode>,
}

impl FileSystemNode {
    pub fn folder(path: &Path) -> Self {
        Self::new(path, NodeKind::Folder)
    }

    pub fn file(path: &Path) -> Self {
        Self::new(path, NodeKind::File)
    }

    fn new(path: &Path, kind: NodeKind) -> Self {
        Self {
            name: display_name(path),
            path: path.to_path_buf(),
            kind,
            children: Vec::new(),
        }
    }

    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }

    /// Depth-first search for the node at `path`.
    #[cfg(test)]
    pub fn find(&self, path: &Path) -> Option<&FileSystemNode> {
        if self.path == path {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(path))
    }

    /// Depth-first search for the node at `path`, mutably.
    pub fn find_mut(&mut self, path: &Path) -> Option<&mut FileSystemNode> {
        if self.path == path {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_mut(path))
    }

    /// Point the node at `old` to `new`, updating its display name.
    ///
    /// Returns false when no node has path `old`.
    pub fn patch_path(&mut self, old: &Path, new: &Path) -> bool {
        match self.find_mut(old) {
            Some(node) => {
                node.name = display_name(new);
                node.path = new.to_path_buf();
                true
            }
            None => false,
        }
    }

    /// Number of file nodes in this subtree.
    pub fn file_count(&self) -> usize {
        match self.kind {
            NodeKind::File => 1,
            NodeKind::Folder => self.children.iter().map(Self::file_count).sum(),
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
