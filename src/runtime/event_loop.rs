use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::debug;

use crate::app::{App, Focus, FormField};
use crate::config;
use crate::ui;

/// State tracked by the runtime event loop across iterations.
#[derive(Default)]
pub struct EventLoopState {
    /// Internal two-key prefix state used for `gg` handling.
    pub pending_gg: bool,
}

/// Main terminal event loop: draws, then handles one key at a time.
/// Returns `Ok(())` when the user quits.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = EventLoopState::default();
    loop {
        terminal.draw(|f| ui::draw(f, app, &settings.ui))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, app, &mut state) {
                    debug!("quit requested");
                    return Ok(());
                }
            }
        }
    }
}

/// Apply one key press to `app`. Returns true when the user asked to quit.
pub fn handle_key_event(key: KeyEvent, app: &mut App, state: &mut EventLoopState) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if app.browse_prompt.is_some() {
        state.pending_gg = false;
        match key.code {
            KeyCode::Esc => app.cancel_browse_prompt(),
            KeyCode::Enter => app.confirm_browse_prompt(),
            KeyCode::Backspace => app.pop_char(),
            KeyCode::Char('u') if ctrl => app.clear_field(),
            KeyCode::Char(c) if !c.is_control() => app.push_char(c),
            _ => {}
        }
        return false;
    }

    if let Focus::Field(field) = app.focus {
        state.pending_gg = false;
        match key.code {
            KeyCode::Esc => app.focus_tree(),
            KeyCode::Tab => app.focus_next(),
            KeyCode::BackTab => app.focus_prev(),
            KeyCode::Enter if field == FormField::NewName => app.rename_selected(),
            KeyCode::Enter => app.update_tags(),
            KeyCode::Backspace => app.pop_char(),
            KeyCode::Char('a') if ctrl => app.auto_parse(),
            KeyCode::Char('u') if ctrl => app.clear_field(),
            KeyCode::Char('s') if ctrl => app.update_tags(),
            KeyCode::Char(c) if !ctrl && !c.is_control() => app.push_char(c),
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Char('q') => {
            state.pending_gg = false;
            return true;
        }
        KeyCode::Char('g') => {
            if state.pending_gg {
                state.pending_gg = false;
                app.move_top();
            } else {
                state.pending_gg = true;
            }
        }
        KeyCode::Char('G') => {
            state.pending_gg = false;
            app.move_bottom();
        }
        KeyCode::Char('j') | KeyCode::Down => {
            state.pending_gg = false;
            app.move_down();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.pending_gg = false;
            app.move_up();
        }
        KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => {
            state.pending_gg = false;
            app.activate();
        }
        KeyCode::Char('h') | KeyCode::Left => {
            state.pending_gg = false;
            app.collapse();
        }
        KeyCode::Tab => {
            state.pending_gg = false;
            app.focus_next();
        }
        KeyCode::BackTab => {
            state.pending_gg = false;
            app.focus_prev();
        }
        KeyCode::Char('a') => {
            state.pending_gg = false;
            app.auto_parse();
        }
        KeyCode::Char('u') => {
            state.pending_gg = false;
            app.update_tags();
        }
        KeyCode::Char('r') => {
            state.pending_gg = false;
            app.focus = Focus::Field(FormField::NewName);
        }
        KeyCode::Char('R') => {
            state.pending_gg = false;
            app.rename_selected();
        }
        KeyCode::Char('b') => {
            state.pending_gg = false;
            let initial = app
                .root_dir()
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            app.open_browse_prompt(initial);
        }
        KeyCode::Char(_) => {
            // g pending should clear on any other printable char
            state.pending_gg = false;
        }
        _ => {}
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::tags::FilenameParser;
    use crate::test_support::write_silent_wav;
    use tempfile::tempdir;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn app_with_files() -> (tempfile::TempDir, App) {
        let dir = tempdir().unwrap();
        write_silent_wav(&dir.path().join("a.wav"));
        write_silent_wav(&dir.path().join("Band - Tune.wav"));

        let mut settings = Settings::default();
        settings.library.extensions = vec!["wav".to_string()];
        let mut app = App::new(&settings, FilenameParser::default());
        app.browse(dir.path());
        (dir, app)
    }

    #[test]
    fn q_quits_only_from_tree_focus() {
        let (_dir, mut app) = app_with_files();
        let mut state = EventLoopState::default();

        app.focus = Focus::Field(FormField::Title);
        assert!(!handle_key_event(press(KeyCode::Char('q')), &mut app, &mut state));
        assert_eq!(app.form.title, "q");

        assert!(!handle_key_event(press(KeyCode::Esc), &mut app, &mut state));
        assert!(handle_key_event(press(KeyCode::Char('q')), &mut app, &mut state));
    }

    #[test]
    fn gg_and_g_move_to_ends() {
        let (_dir, mut app) = app_with_files();
        let mut state = EventLoopState::default();

        handle_key_event(press(KeyCode::Char('G')), &mut app, &mut state);
        assert_eq!(app.cursor, app.rows().len() - 1);

        handle_key_event(press(KeyCode::Char('g')), &mut app, &mut state);
        assert!(state.pending_gg);
        handle_key_event(press(KeyCode::Char('g')), &mut app, &mut state);
        assert_eq!(app.cursor, 0);
        assert!(!state.pending_gg);
    }

    #[test]
    fn moving_onto_a_file_selects_it_and_a_then_enter_updates() {
        let (dir, mut app) = app_with_files();
        let mut state = EventLoopState::default();

        // Rows: root, "a.wav", "Band - Tune.wav"
        handle_key_event(press(KeyCode::Char('j')), &mut app, &mut state);
        handle_key_event(press(KeyCode::Char('j')), &mut app, &mut state);
        assert_eq!(app.selected_label, "Band - Tune");

        handle_key_event(press(KeyCode::Char('a')), &mut app, &mut state);
        assert_eq!(app.form.artist, "Band");
        assert_eq!(app.form.title, "Tune");

        handle_key_event(press(KeyCode::Tab), &mut app, &mut state);
        handle_key_event(press(KeyCode::Tab), &mut app, &mut state);
        assert_eq!(app.focus, Focus::Field(FormField::Title));
        handle_key_event(press(KeyCode::Enter), &mut app, &mut state);

        let tags = crate::tags::read_tags(&dir.path().join("Band - Tune.wav")).unwrap();
        assert_eq!(tags.artist, "Band");
        assert_eq!(tags.title, "Tune");
    }

    #[test]
    fn r_edits_name_and_enter_renames() {
        let (dir, mut app) = app_with_files();
        let mut state = EventLoopState::default();

        handle_key_event(press(KeyCode::Char('j')), &mut app, &mut state);
        assert_eq!(app.selected_label, "a");

        handle_key_event(press(KeyCode::Char('r')), &mut app, &mut state);
        handle_key_event(ctrl('u'), &mut app, &mut state);
        for c in "b".chars() {
            handle_key_event(press(KeyCode::Char(c)), &mut app, &mut state);
        }
        handle_key_event(press(KeyCode::Enter), &mut app, &mut state);

        assert!(dir.path().join("b.wav").exists());
        assert_eq!(app.selected_label, "b");
    }

    #[test]
    fn browse_prompt_takes_typing_until_escape() {
        let (_dir, mut app) = app_with_files();
        let mut state = EventLoopState::default();

        handle_key_event(press(KeyCode::Char('b')), &mut app, &mut state);
        assert!(app.browse_prompt.is_some());
        handle_key_event(ctrl('u'), &mut app, &mut state);
        handle_key_event(press(KeyCode::Char('q')), &mut app, &mut state);
        assert_eq!(app.browse_prompt.as_deref(), Some("q"));

        handle_key_event(press(KeyCode::Esc), &mut app, &mut state);
        assert!(app.browse_prompt.is_none());
    }
}
