//! Tag access: the three editable fields, reading/writing them through
//! `lofty`, and guessing artist/title from a file name.

mod io;
mod model;
mod parse;

pub use io::{read_tags, write_tags};
pub use model::*;
pub use parse::FilenameParser;

#[cfg(test)]
mod tests;
