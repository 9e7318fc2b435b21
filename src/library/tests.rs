use super::*;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

fn tree() -> FileSystemNode {
    let mut root = FileSystemNode::folder(Path::new("/music"));
    let mut album = FileSystemNode::folder(Path::new("/music/album"));
    album
        .children
        .push(FileSystemNode::file(Path::new("/music/album/01 - Intro.mp3")));
    root.children.push(album);
    root.children
        .push(FileSystemNode::file(Path::new("/music/single.mp3")));
    root
}

fn names(rows: &[Row]) -> Vec<(usize, &str)> {
    rows.iter().map(|r| (r.depth, r.name.as_str())).collect()
}

#[test]
fn visible_rows_shows_root_children_but_not_collapsed_folders() {
    let rows = visible_rows(&tree(), &HashSet::new());
    assert_eq!(
        names(&rows),
        vec![(0, "music"), (1, "album"), (1, "single.mp3")]
    );
    assert!(rows[0].expanded);
    assert!(!rows[1].expanded);
    assert!(rows[1].is_folder());
    assert!(!rows[2].is_folder());
}

#[test]
fn visible_rows_descends_into_expanded_folders() {
    let expanded: HashSet<PathBuf> = [PathBuf::from("/music/album")].into_iter().collect();
    let rows = visible_rows(&tree(), &expanded);
    assert_eq!(
        names(&rows),
        vec![
            (0, "music"),
            (1, "album"),
            (2, "01 - Intro.mp3"),
            (1, "single.mp3")
        ]
    );
}

#[test]
fn folder_paths_collects_every_folder() {
    let folders = folder_paths(&tree());
    assert_eq!(folders.len(), 2);
    assert!(folders.contains(Path::new("/music")));
    assert!(folders.contains(Path::new("/music/album")));
}

#[test]
fn patch_path_renames_node_in_place() {
    let mut root = tree();
    let old = Path::new("/music/album/01 - Intro.mp3");
    let new = Path::new("/music/album/Band - Intro.mp3");

    assert!(root.patch_path(old, new));
    assert!(root.find(old).is_none());

    let node = root.find(new).unwrap();
    assert_eq!(node.name, "Band - Intro.mp3");
    assert_eq!(node.kind, NodeKind::File);
    // Position among siblings is unchanged.
    assert_eq!(root.children[0].children[0].path, new);

    assert!(!root.patch_path(Path::new("/nowhere.mp3"), new));
}

#[test]
fn file_stem_strips_extension() {
    assert_eq!(file_stem(Path::new("/a/Artist - Song.mp3")), "Artist - Song");
    assert_eq!(file_stem(Path::new("/a/noext")), "noext");
}
