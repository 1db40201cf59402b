//! Pagination bar rendering

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::{page_window, PageLabel, SearchState};

pub fn render_pagination(frame: &mut Frame, area: Rect, search_state: &SearchState, is_focused: bool) {
    let current = search_state.current_page();
    let total_pages = search_state.total_pages();

    let border_style = if is_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" Page {} of {} ", current, total_pages))
        .title_bottom(
            Line::from(format!(" Items per page: {} (s) ", search_state.page_size)).right_aligned(),
        );

    frame.render_widget(Paragraph::new(pagination_line(current, total_pages)).centered().block(block), area);
}

pub fn pagination_line(current: u32, total_pages: u32) -> Line<'static> {
    let enabled = Style::default().fg(Color::White);
    let disabled = Style::default().fg(Color::DarkGray);

    let mut spans = vec![
        Span::styled("◀ Prev", if current > 1 { enabled } else { disabled }),
        Span::raw("   "),
    ];

    for label in page_window(current, total_pages) {
        match label {
            PageLabel::Page(page) if page == current => spans.push(Span::styled(
                format!("[{}]", page),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )),
            PageLabel::Page(page) => spans.push(Span::styled(format!(" {} ", page), enabled)),
            PageLabel::Ellipsis => spans.push(Span::styled(" … ", disabled)),
        }
    }

    spans.push(Span::raw("   "));
    spans.push(Span::styled("Next ▶", if current < total_pages { enabled } else { disabled }));
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn line_shows_window_and_marks_current() {
        let line = pagination_line(5, 10);
        assert_eq!(
            text(&line),
            "◀ Prev    1  …  3  4 [5] 6  7  …  10    Next ▶"
        );
    }

    #[test]
    fn edges_disable_prev_and_next() {
        let first = pagination_line(1, 3);
        assert_eq!(first.spans[0].style.fg, Some(Color::DarkGray));
        let last = pagination_line(3, 3);
        assert_eq!(last.spans.last().unwrap().style.fg, Some(Color::DarkGray));
    }
}
