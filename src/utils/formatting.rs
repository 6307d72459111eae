//! Formatting utilities used for CLI and export outputs.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn pad_right(s: &str, width: usize) -> String {
    let visible = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(visible)))
}

/// Cut `s` to at most `max` display columns, ending with "…" when cut.
pub fn truncate(s: &str, max: usize) -> String {
    if UnicodeWidthStr::width(s) <= max {
        return s.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Horizontal bar for a percentage, `cells` characters wide.
pub fn percent_bar(percentage: u32, cells: usize) -> String {
    let filled = ((percentage.min(100) as usize) * cells + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(cells - filled))
}

/// Coordinates with the six decimals used everywhere in the dashboard.
pub fn coords(lat: f64, lng: f64) -> String {
    format!("{:.6}, {:.6}", lat, lng)
}
