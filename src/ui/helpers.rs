//! Helper functions and constants for UI rendering

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Spinner frames for loading indicators
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner(tick_count: u64) -> &'static str {
    SPINNER_FRAMES[(tick_count % SPINNER_FRAMES.len() as u64) as usize]
}

/// Truncate to at most `max_width` terminal columns, ending with "…" when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Compact count (e.g., 1234 -> "1.2k", 2500000 -> "2.5M")
pub fn format_count(n: u64) -> String {
    // 999_950 and up would round to "1000.0k".
    if n >= 999_950 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}k", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// First row to draw so that `selected` stays inside a window of `height` rows.
pub fn scroll_offset(selected: usize, height: usize) -> usize {
    if height == 0 {
        0
    } else {
        selected.saturating_sub(height - 1)
    }
}
