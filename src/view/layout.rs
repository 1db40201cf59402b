//! Layout rendering (top bar, screen regions)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use ratatui::widgets::Padding;

use crate::model::{ActiveSection, SearchType, ServiceStatus, UiState};

/// Rows given to the visualizer strip at the bottom of the screen
pub const VISUALIZER_HEIGHT: u16 = 8;

/// Screen regions, top to bottom
pub struct Regions {
    pub top_bar: Rect,
    pub content: Rect,
    pub pagination: Rect,
    pub visualizer: Rect,
}

pub fn split_screen(area: Rect, show_pagination: bool, show_visualizer: bool) -> Regions {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(if show_visualizer { VISUALIZER_HEIGHT } else { 0 }),
        ])
        .split(area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search bar + type + status
            Constraint::Min(0),    // Results
            Constraint::Length(if show_pagination { 3 } else { 0 }),
        ])
        .split(outer[0]);

    Regions {
        top_bar: chunks[0],
        content: chunks[1],
        pagination: chunks[2],
        visualizer: outer[1],
    }
}

pub fn render_top_bar(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // Search input
            Constraint::Length(32), // Search type
            Constraint::Length(26), // Backend status
        ])
        .split(area);

    let is_focused = ui_state.active_section == ActiveSection::Search;
    let search_style = if is_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::White)
    };

    let search_text = if ui_state.search_input.is_empty() {
        if is_focused {
            "Search for tracks, artists, or albums...".to_string()
        } else {
            "Press / to search".to_string()
        }
    } else if is_focused {
        format!("{}▏", ui_state.search_input)
    } else {
        ui_state.search_input.clone()
    };

    let search = Paragraph::new(search_text)
        .style(search_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" 🎧 Music Explorer ")
                .padding(Padding::horizontal(1))
                .border_style(if is_focused {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default()
                }),
        );
    frame.render_widget(search, chunks[0]);

    let type_spans: Vec<Span> = SearchType::ALL
        .iter()
        .flat_map(|&kind| {
            let style = if kind == ui_state.search_type {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            vec![Span::styled(format!("{} {}", kind.icon(), kind.label()), style), Span::raw(" ")]
        })
        .collect();

    let types = Paragraph::new(Line::from(type_spans))
        .block(Block::default().borders(Borders::ALL).title(" Type (↑/↓) "));
    frame.render_widget(types, chunks[1]);

    let (indicator, color) = match ui_state.service_status {
        ServiceStatus::Healthy => ("●", Color::Green),
        ServiceStatus::Unavailable => ("○", Color::Red),
        ServiceStatus::Checking => ("◌", Color::Yellow),
    };
    let status = Paragraph::new(format!("{} Backend {}", indicator, ui_state.service_status.label()))
        .style(Style::default().fg(color))
        .block(Block::default().borders(Borders::ALL).title(" Status "));
    frame.render_widget(status, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_collapse_when_hidden() {
        let area = Rect::new(0, 0, 100, 40);
        let all = split_screen(area, true, true);
        assert_eq!(all.visualizer.height, VISUALIZER_HEIGHT);
        assert_eq!(all.pagination.height, 3);
        assert_eq!(all.top_bar.height, 3);
        assert_eq!(all.content.height, 40 - 3 - 3 - VISUALIZER_HEIGHT);

        let bare = split_screen(area, false, false);
        assert_eq!(bare.visualizer.height, 0);
        assert_eq!(bare.pagination.height, 0);
        assert_eq!(bare.content.height, 37);
    }

    #[test]
    fn visualizer_region_ignores_pagination() {
        let area = Rect::new(0, 0, 120, 30);
        assert_eq!(
            split_screen(area, true, true).visualizer,
            split_screen(area, false, true).visualizer
        );
    }
}
