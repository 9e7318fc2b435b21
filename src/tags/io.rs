use std::path::Path;

use lofty::config::WriteOptions;
use lofty::prelude::*;
use lofty::tag::Tag;
use tracing::debug;

use super::model::TagSnapshot;
use crate::error::Result;

/// Read title/artist/album from the file at `path`.
///
/// Uses the primary tag, falling back to the first tag found. A file without
/// any tag yields an empty snapshot; a file lofty cannot parse is an error.
pub fn read_tags(path: &Path) -> Result<TagSnapshot> {
    let tagged = lofty::read_from_path(path)?;

    let snapshot = match tagged.primary_tag().or_else(|| tagged.first_tag()) {
        Some(tag) => TagSnapshot {
            title: tag.title().map(|v| v.into_owned()).unwrap_or_default(),
            artist: tag.artist().map(|v| v.into_owned()).unwrap_or_default(),
            album: tag.album().map(|v| v.into_owned()).unwrap_or_default(),
        },
        None => TagSnapshot::default(),
    };

    debug!(path = %path.display(), empty = snapshot.is_empty(), "read tags");
    Ok(snapshot)
}

/// Write `snapshot` into the primary tag of the file at `path`.
///
/// Items other than title/artist/album in an existing primary tag are kept.
/// A file without a primary tag gets a fresh one; other tag types already in
/// the file are left alone. Empty fields remove the corresponding item.
pub fn write_tags(path: &Path, snapshot: &TagSnapshot) -> Result<()> {
    let tagged = lofty::read_from_path(path)?;

    let mut tag = match tagged.primary_tag() {
        Some(existing) => existing.clone(),
        None => {
            debug!(
                path = %path.display(),
                tag_type = ?tagged.primary_tag_type(),
                "creating primary tag"
            );
            Tag::new(tagged.primary_tag_type())
        }
    };

    set_or_remove(&mut tag, &snapshot.title, Tag::set_title, Tag::remove_title);
    set_or_remove(&mut tag, &snapshot.artist, Tag::set_artist, Tag::remove_artist);
    set_or_remove(&mut tag, &snapshot.album, Tag::set_album, Tag::remove_album);

    tag.save_to_path(path, WriteOptions::default())?;

    debug!(path = %path.display(), tag_type = ?tag.tag_type(), "wrote tags");
    Ok(())
}

fn set_or_remove(tag: &mut Tag, value: &str, set: fn(&mut Tag, String), remove: fn(&mut Tag)) {
    if value.is_empty() {
        remove(tag);
    } else {
        set(tag, value.to_string());
    }
}
