//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, List, ListItem, Padding, Paragraph, Row, Table, Wrap},
};

use crate::app::{App, Focus, FormField, StatusLevel};
use crate::config::UiSettings;

const CONTROLS: &[(&str, &str)] = &[
    ("j/k", "up/down"),
    ("gg/G", "top/bottom"),
    ("enter/l", "open/select"),
    ("h", "collapse"),
    ("tab", "edit fields"),
    ("a", "auto-parse"),
    ("u", "update tags"),
    ("r", "edit name"),
    ("R", "rename"),
    ("b", "browse"),
    ("q", "quit"),
];

const FORM_CONTROLS: &[(&str, &str)] = &[
    ("tab/S-tab", "next/prev field"),
    ("enter", "rename (name) / update (tags)"),
    ("C-a", "auto-parse"),
    ("C-u", "clear field"),
    ("esc", "back to tree"),
];

/// Render the controls help text for the current focus.
fn controls_text(focus: Focus) -> String {
    let map = match focus {
        Focus::Tree => CONTROLS,
        Focus::Field(_) => FORM_CONTROLS,
    };
    map.iter()
        .map(|(k, v)| format!("[{}] {}", k, v))
        .collect::<Vec<String>>()
        .join(" | ")
}

fn field_label(field: FormField) -> &'static str {
    match field {
        FormField::NewName => "New file name",
        FormField::Title => "Title",
        FormField::Artist => "Artist",
        FormField::Album => "Album",
    }
}

fn status_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Info => Color::Reset,
        StatusLevel::Success => Color::Green,
        StatusLevel::Warning => Color::Rgb(255, 165, 0),
        StatusLevel::Error => Color::Red,
    }
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    // Keep the popup smaller and avoid covering the entire UI.
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(3);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Value text for an editable field, with a cursor mark when focused.
fn field_text(app: &App, field: FormField) -> Span<'static> {
    let value = app.form.field(field).to_string();
    if app.focus == Focus::Field(field) {
        Span::styled(
            format!("{value}_"),
            Style::default().add_modifier(Modifier::REVERSED),
        )
    } else {
        Span::raw(value)
    }
}

fn padded_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding {
            left: 1,
            right: 0,
            top: 0,
            bottom: 0,
        })
}

/// Render the entire UI into the provided `frame`.
pub fn draw(frame: &mut Frame, app: &App, ui_settings: &UiSettings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(4),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" retag ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3), Constraint::Ratio(2, 3)])
        .split(chunks[1]);

    draw_tree(frame, app, columns[0]);
    draw_editor(frame, app, columns[1]);

    if let Some(prompt) = &app.browse_prompt {
        let popup_area = centered_rect_sized(72, 3, chunks[1]);
        frame.render_widget(Clear, popup_area);
        let input = Paragraph::new(format!("{prompt}_"))
            .block(padded_block(" browse root folder (enter opens, esc cancels) "));
        frame.render_widget(input, popup_area);
    }

    let footer = Paragraph::new(controls_text(app.focus))
        .block(padded_block(" controls "))
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[2]);
}

fn draw_tree(frame: &mut Frame, app: &App, area: Rect) {
    let rows = app.rows();

    // Center the cursor when possible; only build items for the visible window.
    let total = rows.len();
    let list_height = area.height.saturating_sub(2) as usize;
    let (start, end) = if total <= list_height || list_height == 0 {
        (0, total)
    } else {
        let half = list_height / 2;
        let mut start = app.cursor.saturating_sub(half);
        if start + list_height > total {
            start = total - list_height;
        }
        (start, start + list_height)
    };

    let items: Vec<ListItem> = rows[start..end]
        .iter()
        .map(|row| {
            let indent = "  ".repeat(row.depth);
            let marker = match (row.is_folder(), row.expanded) {
                (true, true) => "▾ ",
                (true, false) => "▸ ",
                (false, _) => "  ",
            };
            ListItem::new(format!("{indent}{marker}{}", row.name))
        })
        .collect();

    let border_style = if app.focus == Focus::Tree {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(" folders and audio files "),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ratatui::widgets::ListState::default();
    if total > 0 {
        state.select(Some(app.cursor - start));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_editor(frame: &mut Frame, app: &App, area: Rect) {
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let selected = Paragraph::new(Line::from(vec![
        Span::styled("Selected file: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(app.selected_label.clone()),
    ]))
    .block(padded_block(" file "));
    frame.render_widget(selected, parts[0]);

    let rename = Paragraph::new(Line::from(vec![
        Span::raw(format!("{}: ", field_label(FormField::NewName))),
        field_text(app, FormField::NewName),
    ]))
    .block(padded_block(" rename "));
    frame.render_widget(rename, parts[1]);

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let tag_rows = [FormField::Title, FormField::Artist, FormField::Album].map(|field| {
        let current = match field {
            FormField::Title => app.current.title.clone(),
            FormField::Artist => app.current.artist.clone(),
            _ => app.current.album.clone(),
        };
        Row::new(vec![
            Cell::from(format!("{}:", field_label(field))),
            Cell::from(current),
            Cell::from(field_text(app, field)),
        ])
    });
    let table = Table::new(
        tag_rows,
        [
            Constraint::Length(8),
            Constraint::Percentage(45),
            Constraint::Percentage(45),
        ],
    )
    .header(Row::new(vec![
        Cell::from(""),
        Cell::from("Current Tags").style(bold),
        Cell::from("New Tags").style(bold),
    ]))
    .block(padded_block(" edit tags "));
    frame.render_widget(table, parts[2]);

    let status = match &app.status {
        Some(s) => {
            Paragraph::new(s.text.as_str()).style(Style::default().fg(status_color(s.level)))
        }
        None => Paragraph::new(""),
    };
    frame.render_widget(
        status.block(padded_block(" status ")).wrap(Wrap { trim: true }),
        parts[3],
    );

    if let Some(dir) = app.root_dir() {
        let dir = Paragraph::new(format!("Dir: {}", dir.display()))
            .wrap(Wrap { trim: true })
            .block(Block::default().padding(Padding::horizontal(1)));
        frame.render_widget(dir, parts[4]);
    }
}
