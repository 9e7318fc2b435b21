//! Error type shared by the library, tag and rename operations.
//!
//! The app layer turns every variant into a one-line status message, so the
//! `Display` text is what the user ends up reading.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Tag(#[from] lofty::error::LoftyError),

    #[error("{0}")]
    Walk(#[from] walkdir::Error),

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("file name must not be empty")]
    EmptyFileName,

    #[error("invalid file name: {0}")]
    InvalidFileName(String),

    #[error("invalid filename pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("filename pattern needs at least two capture groups, found {0}")]
    PatternGroups(usize),

    #[error("configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
