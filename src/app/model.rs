//! Application model types: `App`, the editable `TagForm`, focus and status.
//!
//! The `App` struct holds the scanned tree, the cursor, the selected file
//! with its loaded tags, and the form the user edits. Every user action ends
//! by setting a one-line `Status`.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::{LibrarySettings, Settings};
use crate::library::{self, FileSystemNode, Row};
use crate::tags::{self, FilenameParser, TagSnapshot};

/// Editable form fields, in focus order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FormField {
    NewName,
    Title,
    Artist,
    Album,
}

/// Where keyboard input goes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Tree,
    Field(FormField),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Status {
    pub text: String,
    pub level: StatusLevel,
}

/// Editable copies of the tags plus the "new file name" entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagForm {
    pub new_name: String,
    pub title: String,
    pub artist: String,
    pub album: String,
}

impl TagForm {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::NewName => &self.new_name,
            FormField::Title => &self.title,
            FormField::Artist => &self.artist,
            FormField::Album => &self.album,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::NewName => &mut self.new_name,
            FormField::Title => &mut self.title,
            FormField::Artist => &mut self.artist,
            FormField::Album => &mut self.album,
        }
    }

    pub fn snapshot(&self) -> TagSnapshot {
        TagSnapshot {
            title: self.title.clone(),
            artist: self.artist.clone(),
            album: self.album.clone(),
        }
    }

    fn fill_tags(&mut self, tags: &TagSnapshot) {
        self.title = tags.title.clone();
        self.artist = tags.artist.clone();
        self.album = tags.album.clone();
    }
}

/// The main application model.
pub struct App {
    pub root: Option<FileSystemNode>,
    pub expanded: HashSet<PathBuf>,
    rows: Vec<Row>,
    pub cursor: usize,

    pub selected_file: Option<PathBuf>,
    /// File stem of the selected file.
    pub selected_label: String,
    /// Tags as last loaded from (or saved to) the selected file.
    pub current: TagSnapshot,
    pub form: TagForm,

    pub focus: Focus,
    pub status: Option<Status>,
    /// Text of the "browse root folder" prompt while it is open.
    pub browse_prompt: Option<String>,

    parser: FilenameParser,
    library: LibrarySettings,
    expand_all: bool,
}

impl App {
    /// Create an empty `App`; call `browse` to populate the tree.
    pub fn new(settings: &Settings, parser: FilenameParser) -> Self {
        Self {
            root: None,
            expanded: HashSet::new(),
            rows: Vec::new(),
            cursor: 0,

            selected_file: None,
            selected_label: String::new(),
            current: TagSnapshot::default(),
            form: TagForm::default(),

            focus: Focus::Tree,
            status: None,
            browse_prompt: None,

            parser,
            library: settings.library.clone(),
            expand_all: settings.ui.expand_all,
        }
    }

    /// Rows of the tree as currently expanded.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn cursor_row(&self) -> Option<&Row> {
        self.rows.get(self.cursor)
    }

    pub fn root_dir(&self) -> Option<&Path> {
        self.root.as_ref().map(|r| r.path.as_path())
    }

    pub fn set_status(&mut self, level: StatusLevel, text: impl Into<String>) {
        self.status = Some(Status {
            text: text.into(),
            level,
        });
    }

    fn rebuild_rows(&mut self) {
        self.rows = match &self.root {
            Some(root) => library::visible_rows(root, &self.expanded),
            None => Vec::new(),
        };
        if self.cursor >= self.rows.len() {
            self.cursor = self.rows.len().saturating_sub(1);
        }
    }

    /// Scan `dir` and replace the tree. On failure the previous tree stays.
    pub fn browse(&mut self, dir: &Path) {
        match library::scan(dir, &self.library) {
            Ok(tree) => {
                self.expanded = if self.expand_all {
                    library::folder_paths(&tree)
                } else {
                    [tree.path.clone()].into_iter().collect()
                };
                let files = tree.file_count();
                let shown = tree.path.display().to_string();
                self.root = Some(tree);
                self.cursor = 0;
                self.rebuild_rows();
                self.clear_tags();
                self.set_status(
                    StatusLevel::Info,
                    format!("Found {files} audio files in {shown}"),
                );
            }
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "browse failed");
                self.set_status(StatusLevel::Error, format!("Error opening folder: {e}"));
            }
        }
    }

    pub fn open_browse_prompt(&mut self, initial: String) {
        self.browse_prompt = Some(initial);
    }

    pub fn cancel_browse_prompt(&mut self) {
        self.browse_prompt = None;
    }

    /// Browse to the prompt's path and close the prompt.
    pub fn confirm_browse_prompt(&mut self) {
        if let Some(text) = self.browse_prompt.take() {
            let text = text.trim();
            if text.is_empty() {
                self.set_status(StatusLevel::Error, "Please enter a folder to browse.");
                return;
            }
            self.browse(Path::new(text));
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.rows.len() {
            self.cursor += 1;
            self.select_cursor();
        }
    }

    pub fn move_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.select_cursor();
        }
    }

    pub fn move_top(&mut self) {
        if !self.rows.is_empty() {
            self.cursor = 0;
            self.select_cursor();
        }
    }

    pub fn move_bottom(&mut self) {
        if !self.rows.is_empty() {
            self.cursor = self.rows.len() - 1;
            self.select_cursor();
        }
    }

    /// React to the row under the cursor becoming the selection: a file is
    /// loaded into the form, a folder clears it.
    pub fn select_cursor(&mut self) {
        let Some(row) = self.cursor_row() else {
            self.clear_tags();
            return;
        };
        if row.is_folder() {
            self.clear_tags();
        } else {
            let path = row.path.clone();
            self.select_file(&path);
        }
    }

    /// Enter on a row: toggles a folder, (re)selects a file.
    pub fn activate(&mut self) {
        let Some(row) = self.cursor_row().cloned() else {
            return;
        };
        if row.is_folder() {
            if row.depth > 0 && !self.expanded.remove(&row.path) {
                self.expanded.insert(row.path.clone());
            }
            self.rebuild_rows();
            self.clear_tags();
        } else {
            self.select_file(&row.path);
        }
    }

    /// Collapse the folder under the cursor, or jump to the parent folder.
    pub fn collapse(&mut self) {
        let Some(row) = self.cursor_row().cloned() else {
            return;
        };
        if row.is_folder() && row.depth > 0 && self.expanded.remove(&row.path) {
            self.rebuild_rows();
            return;
        }
        let parent = self.rows[..self.cursor]
            .iter()
            .rposition(|r| r.depth + 1 == row.depth);
        if let Some(pos) = parent {
            self.cursor = pos;
            self.select_cursor();
        }
    }

    pub fn select_file(&mut self, path: &Path) {
        let stem = library::file_stem(path);
        self.selected_file = Some(path.to_path_buf());
        self.selected_label = stem.clone();
        self.form.new_name = stem;
        self.load_tags(path);
    }

    /// Load the file's tags into both the current view and the form.
    pub fn load_tags(&mut self, path: &Path) {
        match self.reload_tags(path) {
            Ok(()) => self.set_status(StatusLevel::Success, "Tags loaded successfully"),
            Err(e) => self.set_status(StatusLevel::Error, format!("Error loading tags: {e}")),
        }
    }

    fn reload_tags(&mut self, path: &Path) -> crate::error::Result<()> {
        let tags = tags::read_tags(path).inspect_err(|e| {
            warn!(path = %path.display(), error = %e, "failed to load tags");
        })?;
        self.form.fill_tags(&tags);
        self.current = tags;
        Ok(())
    }

    /// Forget the selection and empty every field and the status line.
    pub fn clear_tags(&mut self) {
        self.selected_file = None;
        self.selected_label.clear();
        self.current = TagSnapshot::default();
        self.form = TagForm::default();
        self.status = None;
        if matches!(self.focus, Focus::Field(_)) {
            self.focus = Focus::Tree;
        }
    }

    fn require_selected_file(&mut self) -> Option<PathBuf> {
        if let Some(path) = &self.selected_file {
            return Some(path.clone());
        }
        let msg = match self.cursor_row() {
            Some(row) if row.is_folder() => "Please select an audio file.",
            _ => "Please select an audio file first.",
        };
        self.set_status(StatusLevel::Error, msg);
        None
    }

    /// Guess artist and title from the selected file's name into the form.
    pub fn auto_parse(&mut self) {
        let Some(path) = self.require_selected_file() else {
            return;
        };
        let stem = library::file_stem(&path);
        match self.parser.guess(&stem) {
            Some((artist, title)) => {
                self.form.artist = artist;
                self.form.title = title;
                self.set_status(StatusLevel::Success, "Auto-parse successful");
            }
            None => self.set_status(
                StatusLevel::Warning,
                "Couldn't parse artist and title from filename",
            ),
        }
    }

    /// Write the form's tags to the selected file and reload them.
    pub fn update_tags(&mut self) {
        let Some(path) = self.require_selected_file() else {
            return;
        };
        if let Err(e) = tags::write_tags(&path, &self.form.snapshot()) {
            warn!(path = %path.display(), error = %e, "failed to update tags");
            self.set_status(StatusLevel::Error, format!("Error updating tags: {e}"));
            return;
        }
        info!(path = %path.display(), "tags updated");
        self.reload_after_change(&path, "Tags updated successfully!", "Tags updated");
    }

    /// Rename the selected file to the "new file name" field, keeping its
    /// extension, then patch the tree node and reload tags from the new path.
    pub fn rename_selected(&mut self) {
        let Some(old) = self.require_selected_file() else {
            return;
        };
        if self.form.new_name.trim().is_empty() {
            self.set_status(StatusLevel::Error, "Please enter a new file name.");
            return;
        }

        let new = match library::rename_file(&old, &self.form.new_name) {
            Ok(new) => new,
            Err(e) => {
                warn!(path = %old.display(), error = %e, "rename failed");
                self.set_status(StatusLevel::Error, format!("Error renaming file: {e}"));
                return;
            }
        };

        if let Some(root) = self.root.as_mut() {
            root.patch_path(&old, &new);
        }
        self.rebuild_rows();
        if let Some(pos) = self.rows.iter().position(|r| r.path == new) {
            self.cursor = pos;
        }

        let stem = library::file_stem(&new);
        self.selected_file = Some(new.clone());
        self.selected_label = stem.clone();
        self.form.new_name = stem;

        self.reload_after_change(&new, "File renamed successfully.", "File renamed");
    }

    /// Reload tags after a change already made on disk. A failed reload
    /// still reports the change, as a warning.
    pub(super) fn reload_after_change(&mut self, path: &Path, success: &str, done: &str) {
        match self.reload_tags(path) {
            Ok(()) => self.set_status(StatusLevel::Success, success),
            Err(e) => self.set_status(
                StatusLevel::Warning,
                format!("{done}, but error loading tags: {e}"),
            ),
        }
    }

    /// Move focus forward: tree -> name -> title -> artist -> album -> tree.
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Focus::Tree => Focus::Field(FormField::NewName),
            Focus::Field(FormField::NewName) => Focus::Field(FormField::Title),
            Focus::Field(FormField::Title) => Focus::Field(FormField::Artist),
            Focus::Field(FormField::Artist) => Focus::Field(FormField::Album),
            Focus::Field(FormField::Album) => Focus::Tree,
        };
    }

    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            Focus::Tree => Focus::Field(FormField::Album),
            Focus::Field(FormField::NewName) => Focus::Tree,
            Focus::Field(FormField::Title) => Focus::Field(FormField::NewName),
            Focus::Field(FormField::Artist) => Focus::Field(FormField::Title),
            Focus::Field(FormField::Album) => Focus::Field(FormField::Artist),
        };
    }

    pub fn focus_tree(&mut self) {
        self.focus = Focus::Tree;
    }

    pub fn push_char(&mut self, c: char) {
        if let Some(prompt) = self.browse_prompt.as_mut() {
            prompt.push(c);
        } else if let Focus::Field(field) = self.focus {
            self.form.field_mut(field).push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if let Some(prompt) = self.browse_prompt.as_mut() {
            prompt.pop();
        } else if let Focus::Field(field) = self.focus {
            self.form.field_mut(field).pop();
        }
    }

    pub fn clear_field(&mut self) {
        if let Some(prompt) = self.browse_prompt.as_mut() {
            prompt.clear();
        } else if let Focus::Field(field) = self.focus {
            self.form.field_mut(field).clear();
        }
    }
}
