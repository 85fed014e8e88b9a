//! Color theme constants for the ghbrowse UI

use ratatui::style::Color;

/// Border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Focused border and key hints
pub const COLOR_ACCENT: Color = Color::Cyan;

/// Titles and names
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Error messages
pub const COLOR_ERROR: Color = Color::Red;

/// "No internet" banner
pub const COLOR_OFFLINE: Color = Color::Yellow;

/// Star counts
pub const COLOR_STARS: Color = Color::Yellow;

/// Language labels
pub const COLOR_LANGUAGE: Color = Color::LightGreen;
