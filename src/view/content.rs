//! Main content area rendering (status messages, result header, result lists)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, ListItem, Paragraph, Wrap},
    Frame,
};
use ratatui::widgets::Padding;

use crate::model::{
    ActiveSection, Album, Artist, SearchItems, SearchResult, SearchState, SearchStatus,
    SearchType, Track, UiState,
};
use super::utils::{
    calculate_num_width, format_duration, format_genres, format_release_date, format_thousands,
    popularity_bar, popularity_stars, release_year, render_scrollable_list, truncate_string,
};

pub fn render_main_content(
    frame: &mut Frame,
    area: Rect,
    ui_state: &UiState,
    search_state: &SearchState,
) {
    let is_focused = ui_state.active_section == ActiveSection::Results;
    let border_style = if is_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };
    let searching_kind = search_state
        .query
        .as_ref()
        .map_or(ui_state.search_type, |q| q.kind);

    match (&search_state.status, &search_state.result) {
        (SearchStatus::Loading, _) => {
            let loading = Paragraph::new(vec![
                Line::from(format!("Searching {}...", searching_kind)),
                Line::from(""),
                Line::from("This may take a few seconds").style(Style::default().fg(Color::DarkGray)),
            ])
            .style(Style::default().fg(Color::Yellow))
            .centered()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Results ")
                    .border_style(border_style),
            );
            frame.render_widget(loading, area);
        }
        (SearchStatus::Failed(message), _) => {
            let banner = Paragraph::new(vec![
                Line::from(message.as_str()),
                Line::from(""),
                Line::from("Press R (Ctrl+R while typing) to retry connection")
                    .style(Style::default().fg(Color::White)),
            ])
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Error ")
                    .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
                    .padding(Padding::horizontal(1))
                    .border_style(Style::default().fg(Color::Red)),
            );
            frame.render_widget(banner, area);
        }
        (_, Some(result)) => {
            render_results(frame, area, search_state, result, ui_state.result_selected, is_focused);
        }
        (_, None) => {
            let welcome = Paragraph::new("Discover New Music\n\nSearch for tracks, artists, or albums to explore the catalog\n\nType a query and press Enter · ↑/↓ picks the search type · H for help")
                .style(Style::default().fg(Color::DarkGray))
                .centered()
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .padding(Padding::horizontal(1))
                        .border_style(border_style),
                );
            frame.render_widget(welcome, area);
        }
    }
}

/// `"57 total results • Showing 1-20 • Page 1 of 3"`
pub fn results_summary(search_state: &SearchState) -> String {
    let total = search_state.total_items();
    let page = search_state.current_page();
    let showing = match search_state.shown_range() {
        Some((first, last)) => format!("Showing {}-{}", first, last),
        None => "Showing 0".to_string(),
    };
    format!(
        "{} total results • {} • Page {} of {}",
        format_thousands(u64::from(total)),
        showing,
        page,
        search_state.total_pages()
    )
}

fn render_results(
    frame: &mut Frame,
    area: Rect,
    search_state: &SearchState,
    result: &SearchResult,
    selected: usize,
    is_focused: bool,
) {
    let border_style = if is_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Results list
        ])
        .split(area);

    let kind = result.items.kind();
    let header = Paragraph::new(results_summary(search_state))
        .style(Style::default().fg(Color::Cyan))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} {} ", kind.icon(), kind.label()))
                .title_style(Style::default().add_modifier(Modifier::BOLD))
                .padding(Padding::horizontal(1))
                .border_style(border_style),
        );
    frame.render_widget(header, chunks[0]);

    if result.items.is_empty() {
        let empty = Paragraph::new(format!(
            "  {}\n\n  Try adjusting your search terms",
            empty_message(kind)
        ))
        .style(Style::default().fg(Color::DarkGray))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .padding(Padding::horizontal(1))
                .border_style(border_style),
        );
        frame.render_widget(empty, chunks[1]);
        return;
    }

    let content_width = chunks[1].width.saturating_sub(4) as usize;
    let first_number = search_state.shown_offset() as usize + 1;

    let list_items = match &result.items {
        SearchItems::Tracks(tracks) => render_track_items(tracks, selected, is_focused, first_number, content_width),
        SearchItems::Artists(artists) => render_artist_items(artists, selected, is_focused, first_number, content_width),
        SearchItems::Albums(albums) => render_album_items(albums, selected, is_focused, first_number, content_width),
    };

    let list_block = Block::default()
        .borders(Borders::ALL)
        .padding(Padding::horizontal(1))
        .border_style(border_style);

    // +1 for the header row
    render_scrollable_list(frame, chunks[1], list_items, selected + 1, list_block);
}

fn row_style(i: usize, selected: usize, is_focused: bool) -> Style {
    if i == selected && is_focused {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else if i == selected {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

fn header_style() -> Style {
    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
}

fn render_track_items(
    tracks: &[Track],
    selected: usize,
    is_focused: bool,
    first_number: usize,
    content_width: usize,
) -> Vec<ListItem<'static>> {
    let num_width = calculate_num_width(first_number + tracks.len());
    let popularity_width = 15; // 10-cell meter + " 100%"
    let duration_width = 6;
    let preview_width = 1;
    let fixed_width = 1 + num_width + 3 + 3 + 3 + 3 + popularity_width + 3 + duration_width + 1 + preview_width;
    let remaining_width = content_width.saturating_sub(fixed_width);
    let title_width = (remaining_width * 40) / 100;
    let artist_width = (remaining_width * 30) / 100;
    let album_width = remaining_width.saturating_sub(title_width + artist_width);

    let mut items = vec![
        ListItem::new(format!(
            " {:<num_width$}   {:<title_width$}   {:<artist_width$}   {:<album_width$}   {:<popularity_width$}   {:>duration_width$}",
            "#", "Title", "Artist", "Album", "Popularity", "Time",
        ))
        .style(header_style()),
    ];

    items.extend(tracks.iter().enumerate().map(|(i, track)| {
        let preview = if track.preview_url.is_some() { "♪" } else { " " };
        ListItem::new(format!(
            " {:<num_width$}   {}   {}   {}   {} {:>3}%   {:>duration_width$} {}",
            first_number + i,
            truncate_string(&track.name, title_width),
            truncate_string(&track.artist_names(), artist_width),
            truncate_string(&track.album.name, album_width),
            popularity_bar(track.popularity, 10),
            track.popularity,
            format_duration(track.duration_ms),
            preview,
        ))
        .style(row_style(i, selected, is_focused))
    }));

    items
}

fn render_artist_items(
    artists: &[Artist],
    selected: usize,
    is_focused: bool,
    first_number: usize,
    content_width: usize,
) -> Vec<ListItem<'static>> {
    let num_width = calculate_num_width(first_number + artists.len());
    let followers_width = 13;
    let popularity_width = 4;
    let stars_width = 5;
    let fixed_width = 1 + num_width + 3 + 3 + followers_width + 3 + popularity_width + 3 + stars_width + 3;
    let remaining_width = content_width.saturating_sub(fixed_width);
    let name_width = (remaining_width * 45) / 100;
    let genres_width = remaining_width.saturating_sub(name_width);

    let mut items = vec![
        ListItem::new(format!(
            " {:<num_width$}   {:<name_width$}   {:>followers_width$}   {:>popularity_width$}   {:<stars_width$}   {:<genres_width$}",
            "#", "Artist", "Followers", "Pop", "Stars", "Genres",
        ))
        .style(header_style()),
    ];

    items.extend(artists.iter().enumerate().map(|(i, artist)| {
        ListItem::new(format!(
            " {:<num_width$}   {}   {:>followers_width$}   {:>3}%   {}   {}",
            first_number + i,
            truncate_string(&artist.name, name_width),
            format_thousands(artist.followers.total),
            artist.popularity,
            popularity_stars(artist.popularity),
            truncate_string(&format_genres(&artist.genres), genres_width),
        ))
        .style(row_style(i, selected, is_focused))
    }));

    items
}

fn render_album_items(
    albums: &[Album],
    selected: usize,
    is_focused: bool,
    first_number: usize,
    content_width: usize,
) -> Vec<ListItem<'static>> {
    let num_width = calculate_num_width(first_number + albums.len());
    let year_width = 4;
    let tracks_width = 10;
    let type_width = 11;
    let released_width = 18;
    let popularity_width = 4;
    let fixed_width = 1 + num_width + 3 + 3 + 3 + year_width + 3 + tracks_width + 3 + type_width + 3 + released_width + 3 + popularity_width;
    let remaining_width = content_width.saturating_sub(fixed_width);
    let name_width = (remaining_width * 55) / 100;
    let artist_width = remaining_width.saturating_sub(name_width);

    let mut items = vec![
        ListItem::new(format!(
            " {:<num_width$}   {:<name_width$}   {:<artist_width$}   {:>year_width$}   {:>tracks_width$}   {:<type_width$}   {:<released_width$}   {:>popularity_width$}",
            "#", "Album", "Artist", "Year", "Tracks", "Type", "Released", "Pop",
        ))
        .style(header_style()),
    ];

    items.extend(albums.iter().enumerate().map(|(i, album)| {
        let popularity = album
            .popularity
            .map_or_else(|| "-".to_string(), |p| format!("{}%", p));
        ListItem::new(format!(
            " {:<num_width$}   {}   {}   {:>year_width$}   {:>tracks_width$}   {}   {}   {:>popularity_width$}",
            first_number + i,
            truncate_string(&album.name, name_width),
            truncate_string(&album.artist_names(), artist_width),
            release_year(&album.release_date),
            format!("{} tracks", album.total_tracks),
            truncate_string(&album.album_type, type_width),
            truncate_string(&format_release_date(&album.release_date), released_width),
            popularity,
        ))
        .style(row_style(i, selected, is_focused))
    }));

    items
}

fn empty_message(kind: SearchType) -> &'static str {
    match kind {
        SearchType::Tracks => "No tracks found",
        SearchType::Artists => "No artists found",
        SearchType::Albums => "No albums found",
    }
}
