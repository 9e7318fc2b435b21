use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{Error, Result};

/// Rename the file at `old` to `new_stem` plus its current extension, in the
/// same directory.
///
/// There is no collision check beyond what the OS rename enforces. A name
/// that would leave the directory (a separator, `.` or `..`) is rejected.
pub fn rename_file(old: &Path, new_stem: &str) -> Result<PathBuf> {
    let new_stem = new_stem.trim();
    if new_stem.is_empty() {
        return Err(Error::EmptyFileName);
    }
    if new_stem.contains(std::path::is_separator) || new_stem == "." || new_stem == ".." {
        return Err(Error::InvalidFileName(new_stem.to_string()));
    }

    let file_name = match old.extension() {
        Some(ext) => format!("{}.{}", new_stem, ext.to_string_lossy()),
        None => new_stem.to_string(),
    };
    let new = old.with_file_name(file_name);

    if new != old {
        fs::rename(old, &new)?;
        info!(from = %old.display(), to = %new.display(), "renamed file");
    }
    Ok(new)
}
