//! Help popup

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Clear, Row, Table},
    Frame,
};

const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    ("Search", &[
        ("Enter", "Run search"),
        ("↑ / ↓", "Change search type"),
        ("Esc", "Clear input"),
        ("Ctrl+R", "Retry connection"),
    ]),
    ("Results", &[
        ("↑ / ↓", "Move selection"),
        ("← / → · PgUp / PgDn", "Previous / next page"),
        ("Home / End", "First / last page"),
        ("S", "Cycle items per page (10/20/50)"),
        ("R", "Retry connection"),
        ("/ or G", "Focus search"),
    ]),
    ("General", &[
        ("Tab / Shift+Tab", "Cycle sections"),
        ("H", "Toggle this help"),
        ("Q / Ctrl+Q", "Quit"),
    ]),
];

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)]).flex(Flex::Center).areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)]).flex(Flex::Center).areas(row);
    cell
}

fn help_rows() -> Vec<Row<'static>> {
    let heading = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let key = Style::default().fg(Color::Green).add_modifier(Modifier::BOLD);

    let mut rows = Vec::new();
    for (i, (section, bindings)) in HELP_SECTIONS.iter().enumerate() {
        if i > 0 {
            rows.push(Row::new(vec![Cell::from(""), Cell::from("")]));
        }
        rows.push(Row::new(vec![
            Cell::from(Line::from(format!("── {} ──", section)).right_aligned()).style(heading),
            Cell::from(""),
        ]));
        rows.extend(bindings.iter().map(|(keys, action)| {
            Row::new(vec![
                Cell::from(Line::from(*keys).right_aligned()).style(key),
                Cell::from(*action),
            ])
        }));
    }
    rows
}

pub fn render_help_popup(frame: &mut Frame) {
    let rows = help_rows();
    let height = (rows.len() as u16 + 2).min(frame.area().height);
    let popup_area = centered(frame.area(), 64.min(frame.area().width), height);

    frame.render_widget(Clear, popup_area);

    let table = Table::new(rows, [Constraint::Length(22), Constraint::Min(0)])
        .column_spacing(2)
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help (H or Esc to close) ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        );

    frame.render_widget(table, popup_area);
}
