//! Library module: scans a root folder into a tree of folders and audio files,
//! flattens it for display and renames files on disk.

mod display;
mod model;
mod rename;
mod scan;

pub use display::{Row, file_stem, folder_paths, visible_rows};
pub use model::{FileSystemNode, NodeKind};
pub use rename::rename_file;
pub use scan::scan;

#[cfg(test)]
mod tests;
