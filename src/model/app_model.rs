//! Main application model with state management

use std::sync::Arc;
use tokio::sync::Mutex;

use super::search_state::SearchState;
use super::types::{ActiveSection, SearchType, ServiceStatus, UiState};

/// Main application model containing all state
pub struct AppModel {
    pub ui_state: Arc<Mutex<UiState>>,
    pub search_state: Arc<Mutex<SearchState>>,
    pub should_quit: Arc<Mutex<bool>>,
}

impl AppModel {
    pub fn new(page_size: u32) -> Self {
        Self {
            ui_state: Arc::new(Mutex::new(UiState::default())),
            search_state: Arc::new(Mutex::new(SearchState::new(page_size))),
            should_quit: Arc::new(Mutex::new(false)),
        }
    }

    pub async fn should_quit(&self) -> bool {
        *self.should_quit.lock().await
    }

    pub async fn set_should_quit(&self, quit: bool) {
        *self.should_quit.lock().await = quit;
    }

    // ========================================================================
    // UI State
    // ========================================================================

    pub async fn get_ui_state(&self) -> UiState {
        self.ui_state.lock().await.clone()
    }

    pub async fn cycle_section_forward(&self) {
        let mut state = self.ui_state.lock().await;
        state.active_section = state.active_section.next();
    }

    pub async fn cycle_section_backward(&self) {
        let mut state = self.ui_state.lock().await;
        state.active_section = state.active_section.prev();
    }

    pub async fn set_active_section(&self, section: ActiveSection) {
        let mut state = self.ui_state.lock().await;
        state.active_section = section;
    }

    pub async fn append_to_search(&self, c: char) {
        let mut state = self.ui_state.lock().await;
        state.search_input.push(c);
    }

    pub async fn backspace_search(&self) {
        let mut state = self.ui_state.lock().await;
        state.search_input.pop();
    }

    pub async fn clear_search_input(&self) {
        let mut state = self.ui_state.lock().await;
        state.search_input.clear();
    }

    pub async fn cycle_search_type(&self, forward: bool) {
        let mut state = self.ui_state.lock().await;
        state.search_type = if forward {
            state.search_type.next()
        } else {
            state.search_type.prev()
        };
    }

    pub async fn set_search_type(&self, kind: SearchType) {
        self.ui_state.lock().await.search_type = kind;
    }

    pub async fn set_service_status(&self, status: ServiceStatus) {
        self.ui_state.lock().await.service_status = status;
    }

    pub async fn service_status(&self) -> ServiceStatus {
        self.ui_state.lock().await.service_status
    }

    pub async fn reset_result_selection(&self) {
        self.ui_state.lock().await.result_selected = 0;
    }

    pub async fn result_move_up(&self) {
        let mut state = self.ui_state.lock().await;
        state.result_selected = state.result_selected.saturating_sub(1);
    }

    pub async fn result_move_down(&self) {
        let count = self.result_count().await;
        let mut state = self.ui_state.lock().await;
        if state.result_selected < count.saturating_sub(1) {
            state.result_selected += 1;
        }
    }

    pub async fn show_help_popup(&self) {
        self.ui_state.lock().await.show_help_popup = true;
    }

    pub async fn hide_help_popup(&self) {
        self.ui_state.lock().await.show_help_popup = false;
    }

    pub async fn is_help_popup_open(&self) -> bool {
        self.ui_state.lock().await.show_help_popup
    }

    // ========================================================================
    // Search State
    // ========================================================================

    pub async fn get_search_state(&self) -> SearchState {
        self.search_state.lock().await.clone()
    }

    pub async fn result_count(&self) -> usize {
        self.search_state
            .lock()
            .await
            .result
            .as_ref()
            .map_or(0, |r| r.items.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::content::{SearchItems, SearchResult, Track};
    use crate::model::search_state::SearchQuery;

    #[tokio::test]
    async fn search_input_editing() {
        let model = AppModel::new(20);
        for c in "abc".chars() {
            model.append_to_search(c).await;
        }
        model.backspace_search().await;
        assert_eq!(model.get_ui_state().await.search_input, "ab");
        model.clear_search_input().await;
        assert!(model.get_ui_state().await.search_input.is_empty());
    }

    #[tokio::test]
    async fn selection_is_bounded_by_result_count() {
        let model = AppModel::new(20);
        {
            let mut search = model.search_state.lock().await;
            let ticket = search.begin(SearchQuery::new("q", SearchType::Tracks, 1, 20).unwrap());
            search.complete(
                ticket.seq,
                SearchResult {
                    items: SearchItems::Tracks(vec![Track::default(), Track::default()]),
                    total: 2,
                },
            );
        }

        model.result_move_up().await;
        assert_eq!(model.get_ui_state().await.result_selected, 0);
        for _ in 0..5 {
            model.result_move_down().await;
        }
        assert_eq!(model.get_ui_state().await.result_selected, 1);
    }

    #[tokio::test]
    async fn search_type_cycles_both_ways() {
        let model = AppModel::new(20);
        model.cycle_search_type(true).await;
        assert_eq!(model.get_ui_state().await.search_type, SearchType::Artists);
        model.cycle_search_type(false).await;
        model.cycle_search_type(false).await;
        assert_eq!(model.get_ui_state().await.search_type, SearchType::Albums);
    }
}
