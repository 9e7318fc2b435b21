use std::cmp::Ordering;
use std::path::Path;

use tracing::{info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::LibrarySettings;
use crate::error::{Error, Result};

use super::model::FileSystemNode;

pub fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Folders first, then case-insensitive by name.
fn folders_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    b.file_type()
        .is_dir()
        .cmp(&a.file_type().is_dir())
        .then_with(|| {
            a.file_name()
                .to_string_lossy()
                .to_lowercase()
                .cmp(&b.file_name().to_string_lossy().to_lowercase())
        })
}

/// Attach finished folders to their parents until `stack` is `depth` deep.
///
/// The root (bottom of the stack) is never popped.
fn unwind(stack: &mut Vec<FileSystemNode>, depth: usize) {
    while stack.len() > depth.max(1) {
        if let Some(done) = stack.pop() {
            if let Some(parent) = stack.last_mut() {
                parent.children.push(done);
            }
        }
    }
}

/// Walk `root` depth-first and build the folder tree.
///
/// Every folder is kept, even when it holds no qualifying file. Entries that
/// cannot be read are skipped; only a failure on the root itself is an error.
pub fn scan(root: &Path, settings: &LibrarySettings) -> Result<FileSystemNode> {
    let root = std::path::absolute(root)?;
    if !root.is_dir() {
        return Err(Error::NotADirectory(root));
    }

    let mut walker = WalkDir::new(&root)
        .follow_links(settings.follow_links)
        .sort_by(folders_first);

    // Non-recursive = only the root directory.
    let depth_cap = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    let mut stack: Vec<FileSystemNode> = Vec::new();
    let mut skipped = 0usize;

    for entry in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => return Err(err.into()),
            Err(err) => {
                warn!(error = %err, "skipping unreadable entry");
                skipped += 1;
                continue;
            }
        };

        let depth = entry.depth();
        if depth == 0 {
            stack.push(FileSystemNode::folder(entry.path()));
            continue;
        }

        unwind(&mut stack, depth);
        if entry.file_type().is_dir() {
            stack.push(FileSystemNode::folder(entry.path()));
        } else if is_audio_file(entry.path(), settings) {
            if let Some(parent) = stack.last_mut() {
                parent.children.push(FileSystemNode::file(entry.path()));
            }
        }
    }

    unwind(&mut stack, 1);
    let tree = stack.pop().ok_or(Error::NotADirectory(root.clone()))?;

    info!(
        root = %root.display(),
        files = tree.file_count(),
        skipped,
        "scanned library"
    );
    Ok(tree)
}
