//! UI rendering for ghbrowse
//!
//! Pure functions from [`App`] to a frame:
//! - Header with the app name and the "no internet" banner
//! - Body: the search screen or the user screen
//! - Footer with key hints or the last status message

mod helpers;
mod repo_list;
mod search;
mod theme;

pub use helpers::{format_count, spinner, truncate_to_width};
pub use theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_LANGUAGE,
    COLOR_OFFLINE, COLOR_STARS,
};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Focus, Screen};
use crate::view_state::ConnectionState;
use repo_list::render_repo_list_screen;
use search::render_search_screen;

/// Render the UI based on current screen
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Screen
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    render_header(frame, chunks[0], app);
    match &app.screen {
        Screen::UserList => render_search_screen(frame, chunks[1], app),
        Screen::RepoList { login } => render_repo_list_screen(frame, chunks[1], app, login),
    }
    render_footer(frame, chunks[2], app);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        " ghbrowse",
        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
    )];

    if let Screen::RepoList { login } = &app.screen {
        spans.push(Span::styled(format!("  › {}", login), Style::default().fg(COLOR_DIM)));
    }

    if app.connection_state() == ConnectionState::Unavailable {
        spans.push(Span::styled(
            "  ⚠ No internet connection",
            Style::default().fg(COLOR_OFFLINE).add_modifier(Modifier::BOLD),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let line = match &app.status_message {
        Some(message) => Line::from(Span::styled(
            format!(" {}", truncate_to_width(message, area.width.saturating_sub(1) as usize)),
            Style::default().fg(COLOR_DIM),
        )),
        None => keybind_hints(app),
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Key hints for the current screen and focus.
pub fn keybind_hints(app: &App) -> Line<'static> {
    let hints: &[(&str, &str)] = match (&app.screen, app.focus) {
        (Screen::UserList, Focus::Input) => &[
            ("[Enter]", "search"),
            ("[↓]", "results"),
            ("[Ctrl+R]", "retry"),
            ("[Ctrl+C]", "quit"),
        ],
        (Screen::UserList, Focus::Results) => &[
            ("[↑↓]", "select"),
            ("[Enter]", "open"),
            ("[/]", "filter"),
            ("[r]", "retry"),
            ("[Esc]", "edit query"),
            ("[q]", "quit"),
        ],
        (Screen::UserList, Focus::Filter) => &[("[Enter]", "apply"), ("[Esc]", "clear filter")],
        (Screen::RepoList { .. }, _) => &[
            ("[↑↓]", "select"),
            ("[Enter]", "open in browser"),
            ("[r]", "retry"),
            ("[Esc]", "back"),
            ("[q]", "quit"),
        ],
    };

    let mut spans = vec![Span::raw(" ")];
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" | "));
        }
        spans.push(Span::styled(*key, Style::default().fg(COLOR_ACCENT)));
        spans.push(Span::raw(format!(" {}", action)));
    }
    Line::from(spans)
}
