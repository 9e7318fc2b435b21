use std::path::PathBuf;

use serde::Deserialize;

/// Default auto-parse pattern: `Artist - Title` with an optional trailing
/// bracketed suffix such as `[Official Video]`.
pub const DEFAULT_FILENAME_PATTERN: &str = r"^(.*?)\s*-\s*(.*?)(?:\s*\[.*?\])?$";

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/retag/config.toml` or `~/.config/retag/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `RETAG__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub tags: TagSettings,
    pub ui: UiSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Root folder opened at startup when no CLI argument is given.
    pub root: Option<PathBuf>,
    /// File extensions shown in the tree (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            root: None,
            extensions: vec!["mp3".into()],
            follow_links: true,
            include_hidden: false,
            recursive: true,
            max_depth: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TagSettings {
    /// Regex applied to the file stem by auto-parse.
    ///
    /// Capture group 1 is the artist, group 2 the title.
    pub filename_pattern: String,
}

impl Default for TagSettings {
    fn default() -> Self {
        Self {
            filename_pattern: DEFAULT_FILENAME_PATTERN.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
    /// Expand every folder after a browse instead of only the root.
    pub expand_all: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ retag: folders, tags & names ~ ".to_string(),
            expand_all: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub enabled: bool,
    /// `tracing` filter directive, e.g. `info` or `retag=debug`.
    /// `RETAG_LOG` overrides it.
    pub level: String,
    /// Directory for the rolling log file. Defaults to the XDG state dir.
    pub directory: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            level: "info".to_string(),
            directory: None,
        }
    }
}
