use regex::Regex;

use crate::config::DEFAULT_FILENAME_PATTERN;
use crate::error::{Error, Result};

/// Guesses `(artist, title)` from a file stem with a regex.
///
/// Capture group 1 is the artist and group 2 the title; both are trimmed.
#[derive(Debug, Clone)]
pub struct FilenameParser {
    pattern: Regex,
}

impl FilenameParser {
    pub fn new(pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern)?;
        // captures_len counts the implicit whole-match group.
        let groups = pattern.captures_len() - 1;
        if groups < 2 {
            return Err(Error::PatternGroups(groups));
        }
        Ok(Self { pattern })
    }

    /// Returns `None` when the stem does not match.
    pub fn guess(&self, stem: &str) -> Option<(String, String)> {
        let caps = self.pattern.captures(stem)?;
        let artist = caps.get(1).map_or("", |m| m.as_str()).trim();
        let title = caps.get(2).map_or("", |m| m.as_str()).trim();
        Some((artist.to_string(), title.to_string()))
    }
}

impl Default for FilenameParser {
    fn default() -> Self {
        Self {
            pattern: Regex::new(DEFAULT_FILENAME_PATTERN).expect("default pattern compiles"),
        }
    }
}
