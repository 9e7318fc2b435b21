/// Title, artist and album as read from (or written to) a file's tag.
///
/// Missing items are represented as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSnapshot {
    pub title: String,
    pub artist: String,
    pub album: String,
}

impl TagSnapshot {
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.artist.is_empty() && self.album.is_empty()
    }
}
