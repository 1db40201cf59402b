//! Utility functions for rendering UI components

use chrono::NaiveDate;
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, List, ListItem, ListState},
    Frame,
};

pub fn render_scrollable_list(
    frame: &mut Frame,
    area: Rect,
    items: Vec<ListItem>,
    selected_index: usize,
    block: Block,
) {
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default()); // Highlight handled by item styles

    let mut list_state = ListState::default();
    list_state.select(Some(selected_index));

    frame.render_stateful_widget(list, area, &mut list_state);
}

pub fn format_duration(ms: u32) -> String {
    let total_seconds = ms / 1000;
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{}:{:02}", minutes, seconds)
}

/// Calculate width needed for index column (log10(n) + padding)
pub fn calculate_num_width(item_count: usize) -> usize {
    if item_count == 0 {
        2
    } else {
        let digits = (item_count as f64).log10().floor() as usize + 1;
        digits + 1
    }
}

const ELLIPSIS: &str = "...";

/// Fit `s` into exactly `max_width` terminal cells, padding or cutting with an ellipsis
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return format!("{}{}", s, " ".repeat(max_width - s.width()));
    }
    if max_width < ELLIPSIS.len() {
        let (head, width) = s.unicode_truncate(max_width);
        return format!("{}{}", head, " ".repeat(max_width - width));
    }
    let (head, width) = s.unicode_truncate(max_width - ELLIPSIS.len());
    format!("{}{}{}", head, ELLIPSIS, " ".repeat(max_width - ELLIPSIS.len() - width))
}

/// `1234567` -> `"1,234,567"`
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Horizontal meter for a 0-100 popularity score
pub fn popularity_bar(popularity: u8, width: usize) -> String {
    let filled = (popularity.min(100) as usize * width).div_ceil(100);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Five-star rendering of a 0-100 popularity score
pub fn popularity_stars(popularity: u8) -> String {
    let stars = (popularity.min(100) as usize).div_ceil(20);
    format!("{}{}", "★".repeat(stars), "☆".repeat(5 - stars))
}

/// First three genres, then a "+N more" suffix
pub fn format_genres(genres: &[String]) -> String {
    if genres.is_empty() {
        return "-".to_string();
    }
    let shown = genres.iter().take(3).cloned().collect::<Vec<_>>().join(", ");
    if genres.len() > 3 {
        format!("{} +{} more", shown, genres.len() - 3)
    } else {
        shown
    }
}

/// Release dates come with day, month or year precision
pub fn format_release_date(date: &str) -> String {
    let date = date.trim();
    if let Ok(day) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return day.format("%B %-d, %Y").to_string();
    }
    if let Ok(month) = NaiveDate::parse_from_str(&format!("{}-01", date), "%Y-%m-%d") {
        return month.format("%B %Y").to_string();
    }
    if date.is_empty() {
        "-".to_string()
    } else {
        date.to_string()
    }
}

pub fn release_year(date: &str) -> String {
    let year: String = date.chars().take(4).collect();
    if year.len() == 4 && year.chars().all(|c| c.is_ascii_digit()) {
        year
    } else {
        "-".to_string()
    }
}
