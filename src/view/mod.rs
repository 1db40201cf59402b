//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! It is organized into submodules by component type:
//!
//! - `utils`: Shared utility functions (formatting, scrollable lists)
//! - `layout`: Screen regions and the top bar
//! - `content`: Results area (status messages, result lists)
//! - `pagination`: Page navigation bar
//! - `visualizer`: Animated bar strip
//! - `overlays`: Help popup

mod utils;
mod layout;
mod content;
mod pagination;
mod visualizer;
mod overlays;

use ratatui::{layout::Rect, Frame};

use crate::model::{should_show_pagination, ActiveSection, SearchState, UiState, VisualizerFrame};

pub use visualizer::surface_size;

pub struct AppView;

impl AppView {
    pub fn render(
        frame: &mut Frame,
        ui_state: &UiState,
        search_state: &SearchState,
        visualizer: Option<&VisualizerFrame>,
    ) {
        // Page controls belong to the displayed result; hide them while another loads
        let show_pagination = !search_state.is_loading()
            && search_state.result.is_some()
            && should_show_pagination(search_state.total_pages());
        let regions = layout::split_screen(frame.area(), show_pagination, visualizer.is_some());

        // Top bar: Search + type + backend status
        layout::render_top_bar(frame, regions.top_bar, ui_state);

        // Middle: results
        content::render_main_content(frame, regions.content, ui_state, search_state);

        if show_pagination {
            let is_focused = ui_state.active_section == ActiveSection::Results;
            pagination::render_pagination(frame, regions.pagination, search_state, is_focused);
        }

        // Bottom: decorative visualizer
        if let Some(visualizer) = visualizer {
            visualizer::render_visualizer(frame, regions.visualizer, visualizer);
        }

        // Help popup overlay (if open)
        if ui_state.show_help_popup {
            overlays::render_help_popup(frame);
        }
    }

    /// Area the visualizer strip occupies for a given terminal size
    pub fn visualizer_area(area: Rect) -> Rect {
        layout::split_screen(area, false, true).visualizer
    }
}
