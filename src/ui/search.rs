//! Search screen: query input, optional login filter, results.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::helpers::{scroll_offset, spinner, truncate_to_width};
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER};
use crate::app::{App, Focus};
use crate::models::UserSummary;
use crate::view_state::SearchViewState;

pub fn render_search_screen(frame: &mut Frame, area: Rect, app: &App) {
    let show_filter = app.focus == Focus::Filter || !app.login_filter.is_empty();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                               // Input
            Constraint::Length(if show_filter { 1 } else { 0 }), // Filter
            Constraint::Min(0),                                  // Results
        ])
        .split(area);

    render_input(frame, chunks[0], app);
    if show_filter {
        render_filter(frame, chunks[1], app);
    }

    let state = app.search_state();
    let users = state.visible_users(&app.login_filter);
    render_results(frame, chunks[2], app, &state, &users);
}

fn border_style(focused: bool) -> Style {
    Style::default().fg(if focused { COLOR_ACCENT } else { COLOR_BORDER })
}

fn render_input(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Input;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style(focused))
        .title(" Search users ");

    let line = if app.query.is_empty() && !focused {
        Line::from(Span::styled(
            "Type a name or login and press Enter",
            Style::default().fg(COLOR_DIM),
        ))
    } else {
        let mut spans = vec![Span::raw(app.query.clone())];
        if focused {
            spans.push(Span::styled("▏", Style::default().fg(COLOR_ACCENT)));
        }
        Line::from(spans)
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_filter(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled(" Filter logins: ", Style::default().fg(COLOR_DIM)),
        Span::raw(app.login_filter.clone()),
    ];
    if app.focus == Focus::Filter {
        spans.push(Span::styled("▏", Style::default().fg(COLOR_ACCENT)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_results(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    state: &SearchViewState,
    users: &[&UserSummary],
) {
    let title = match state.users.as_ref().and_then(|result| result.total_count) {
        Some(total) if users.len() as u64 != total => {
            format!(" Users ({} of {}) ", users.len(), total)
        }
        Some(total) => format!(" Users ({}) ", total),
        None => " Users ".to_string(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style(app.focus == Focus::Results))
        .title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();

    if state.is_loading {
        lines.push(Line::from(Span::styled(
            format!("{} Searching \"{}\"…", spinner(app.tick_count), state.last_query),
            Style::default().fg(COLOR_ACCENT),
        )));
    } else if let Some(error) = &state.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(COLOR_ERROR),
        )));
        lines.push(Line::from(Span::styled(
            "Press r to retry",
            Style::default().fg(COLOR_DIM),
        )));
    } else if state.is_empty_result() {
        lines.push(Line::from(Span::styled(
            format!("No users found for \"{}\"", state.last_query),
            Style::default().fg(COLOR_DIM),
        )));
    } else if state.users.is_none() {
        lines.push(Line::from(Span::styled(
            "Search GitHub users by name or login",
            Style::default().fg(COLOR_DIM),
        )));
    } else if users.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("No loaded user matches \"{}\"", app.login_filter),
            Style::default().fg(COLOR_DIM),
        )));
    }

    let rows = (inner.height as usize).saturating_sub(lines.len());
    let selected = app.selected_user_index();
    let show_selection = app.focus != Focus::Input;
    let width = inner.width as usize;

    for (i, user) in users
        .iter()
        .enumerate()
        .skip(scroll_offset(selected, rows))
        .take(rows)
    {
        let is_selected = show_selection && i == selected;
        lines.push(user_line(user, is_selected, width));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn user_line(user: &UserSummary, is_selected: bool, width: usize) -> Line<'static> {
    let marker = if is_selected { "▶ " } else { "  " };
    let login = user.login.as_deref().unwrap_or("(unknown)");
    let kind = user.kind.as_deref().unwrap_or_default();

    let login_style = if is_selected {
        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let mut spans = vec![
        Span::styled(marker, Style::default().fg(COLOR_ACCENT)),
        Span::styled(truncate_to_width(login, width.saturating_sub(2)), login_style),
    ];
    if !kind.is_empty() {
        spans.push(Span::styled(format!(" · {}", kind), Style::default().fg(COLOR_DIM)));
    }
    Line::from(spans)
}
