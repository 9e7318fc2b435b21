use super::*;
use crate::test_support::write_silent_wav;
use std::fs;
use tempfile::tempdir;

fn guess(stem: &str) -> Option<(String, String)> {
    FilenameParser::default().guess(stem)
}

fn pair(artist: &str, title: &str) -> Option<(String, String)> {
    Some((artist.to_string(), title.to_string()))
}

#[test]
fn guess_splits_artist_and_title_on_dash() {
    assert_eq!(guess("Artist - Title"), pair("Artist", "Title"));
    assert_eq!(guess("Artist-Title"), pair("Artist", "Title"));
    assert_eq!(guess("  Artist   -   Title  "), pair("Artist", "Title"));
}

#[test]
fn guess_drops_trailing_bracketed_suffix() {
    assert_eq!(
        guess("Daft Punk - One More Time [Official Video]"),
        pair("Daft Punk", "One More Time")
    );
    assert_eq!(guess("A - B [x] [y]"), pair("A", "B"));
}

#[test]
fn guess_keeps_later_dashes_in_the_title() {
    assert_eq!(
        guess("Artist - Song - Radio Edit"),
        pair("Artist", "Song - Radio Edit")
    );
}

#[test]
fn guess_returns_none_without_a_dash() {
    assert_eq!(guess("just a title"), None);
    assert_eq!(guess(""), None);
}

#[test]
fn custom_pattern_uses_first_two_groups() {
    let parser = FilenameParser::new(r"^(.+?)_(.+)$").unwrap();
    assert_eq!(parser.guess("artist_some title"), pair("artist", "some title"));
    assert_eq!(parser.guess("no separator"), None);
}

#[test]
fn parser_rejects_patterns_with_fewer_than_two_groups() {
    assert!(matches!(
        FilenameParser::new("^(.*)$"),
        Err(crate::error::Error::PatternGroups(1))
    ));
    assert!(matches!(
        FilenameParser::new("(oops"),
        Err(crate::error::Error::Pattern(_))
    ));
}

#[test]
fn read_tags_on_untagged_file_is_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("blank.wav");
    write_silent_wav(&path);

    let snapshot = read_tags(&path).unwrap();
    assert!(snapshot.is_empty());
}

#[test]
fn write_then_read_returns_written_values() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("song.wav");
    write_silent_wav(&path);

    let written = TagSnapshot {
        title: "One More Time".to_string(),
        artist: "Daft Punk".to_string(),
        album: "Discovery".to_string(),
    };
    write_tags(&path, &written).unwrap();

    assert_eq!(read_tags(&path).unwrap(), written);
}

#[test]
fn write_with_empty_field_clears_it() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("song.wav");
    write_silent_wav(&path);

    write_tags(
        &path,
        &TagSnapshot {
            title: "T".to_string(),
            artist: "A".to_string(),
            album: "Old album".to_string(),
        },
    )
    .unwrap();
    write_tags(
        &path,
        &TagSnapshot {
            title: "T2".to_string(),
            artist: "A".to_string(),
            album: String::new(),
        },
    )
    .unwrap();

    let snapshot = read_tags(&path).unwrap();
    assert_eq!(snapshot.title, "T2");
    assert_eq!(snapshot.artist, "A");
    assert_eq!(snapshot.album, "");
}

#[test]
fn read_and_write_fail_on_non_audio_content() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("fake.wav");
    fs::write(&path, b"definitely not a riff file").unwrap();

    assert!(read_tags(&path).is_err());
    assert!(write_tags(&path, &TagSnapshot::default()).is_err());
}
