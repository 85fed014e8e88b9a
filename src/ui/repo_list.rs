//! User screen: profile header and the user's original repositories.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::helpers::{format_count, scroll_offset, spinner, truncate_to_width};
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_LANGUAGE, COLOR_STARS,
};
use crate::app::App;
use crate::models::{Profile, RepositoryListItem};
use crate::view_state::{RepoListViewState, ResourceState};

pub fn render_repo_list_screen(frame: &mut Frame, area: Rect, app: &App, login: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Profile
            Constraint::Min(0),    // Repositories
        ])
        .split(area);

    let state = app.repo_list_state();
    render_profile(frame, chunks[0], app, login, &state.profile);
    render_repos(frame, chunks[1], app, login, &state);
}

fn block(title: String) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(title)
}

fn render_profile(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    login: &str,
    profile: &ResourceState<Profile>,
) {
    let block = block(format!(" @{} ", login));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = match (&profile.data, &profile.error) {
        (_, Some(error)) => vec![
            Line::from(Span::styled(error.clone(), Style::default().fg(COLOR_ERROR))),
            Line::from(Span::styled("Press r to retry", Style::default().fg(COLOR_DIM))),
        ],
        (Some(data), None) => profile_lines(data, inner.width as usize),
        (None, None) if profile.is_loading => vec![Line::from(Span::styled(
            format!("{} Loading profile…", spinner(app.tick_count)),
            Style::default().fg(COLOR_ACCENT),
        ))],
        (None, None) => Vec::new(),
    };

    frame.render_widget(Paragraph::new(lines), inner);
}

fn profile_lines(profile: &Profile, width: usize) -> Vec<Line<'static>> {
    let mut title = vec![Span::styled(
        profile.display_name().to_string(),
        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
    )];
    if let Some(login) = profile.login.as_deref() {
        if login != profile.display_name() {
            title.push(Span::styled(format!("  @{}", login), Style::default().fg(COLOR_DIM)));
        }
    }

    let about = profile
        .bio
        .as_deref()
        .filter(|bio| !bio.trim().is_empty())
        .map(|bio| bio.trim().replace('\n', " "))
        .or_else(|| {
            let parts: Vec<&str> = [profile.company.as_deref(), profile.location.as_deref()]
                .into_iter()
                .flatten()
                .filter(|s| !s.trim().is_empty())
                .collect();
            (!parts.is_empty()).then(|| parts.join(" · "))
        })
        .unwrap_or_default();

    let mut stats = vec![
        format!("{} followers", format_count(profile.followers.unwrap_or(0))),
        format!("{} following", format_count(profile.following.unwrap_or(0))),
        format!("{} public repos", profile.public_repos.unwrap_or(0)),
    ];
    if let Some(joined) = profile.joined_on() {
        stats.push(format!("joined {}", joined));
    }

    vec![
        Line::from(title),
        Line::from(Span::styled(truncate_to_width(&about, width), Style::default().fg(COLOR_DIM))),
        Line::from(truncate_to_width(&stats.join(" · "), width)),
    ]
}

fn render_repos(frame: &mut Frame, area: Rect, app: &App, login: &str, state: &RepoListViewState) {
    let visible = state.visible_repos();
    let title = match &state.repos.data {
        Some(_) => format!(" Repositories ({}) ", visible.len()),
        None => " Repositories ".to_string(),
    };
    let block = block(title).border_style(Style::default().fg(COLOR_ACCENT));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    if state.repos.is_loading {
        lines.push(Line::from(Span::styled(
            format!("{} Loading repositories…", spinner(app.tick_count)),
            Style::default().fg(COLOR_ACCENT),
        )));
    } else if let Some(error) = &state.repos.error {
        lines.push(Line::from(Span::styled(error.clone(), Style::default().fg(COLOR_ERROR))));
        lines.push(Line::from(Span::styled("Press r to retry", Style::default().fg(COLOR_DIM))));
    } else if state.has_no_original_repos() {
        lines.push(Line::from(Span::styled(
            format!("{} has no original repositories", login),
            Style::default().fg(COLOR_DIM),
        )));
    }

    let rows = (inner.height as usize).saturating_sub(lines.len());
    let selected = app.selected_repo_index();
    let width = inner.width as usize;

    for (i, repo) in visible
        .iter()
        .enumerate()
        .skip(scroll_offset(selected, rows))
        .take(rows)
    {
        lines.push(repo_line(repo, i == selected, width));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn repo_line(repo: &RepositoryListItem, is_selected: bool, width: usize) -> Line<'static> {
    let marker = if is_selected { "▶ " } else { "  " };
    let name = repo.name.as_deref().unwrap_or_else(|| repo.display_name());
    let name_style = if is_selected {
        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let mut spans = vec![
        Span::styled(marker, Style::default().fg(COLOR_ACCENT)),
        Span::styled(name.to_string(), name_style),
    ];
    let mut used = marker.width() + name.width();

    if let Some(stars) = repo.stargazers_count {
        let text = format!("  ★ {}", format_count(stars));
        used += text.width();
        spans.push(Span::styled(text, Style::default().fg(COLOR_STARS)));
    }
    if let Some(language) = repo.language.as_deref() {
        let text = format!("  {}", language);
        used += text.width();
        spans.push(Span::styled(text, Style::default().fg(COLOR_LANGUAGE)));
    }
    if let Some(description) = repo.description.as_deref().filter(|d| !d.trim().is_empty()) {
        let room = width.saturating_sub(used + 2);
        if room > 1 {
            spans.push(Span::styled(
                format!("  {}", truncate_to_width(description.trim(), room)),
                Style::default().fg(COLOR_DIM),
            ));
        }
    }
    Line::from(spans)
}
