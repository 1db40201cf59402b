//! Search dispatch and pagination controller methods

use crate::model::{ActiveSection, SearchQuery, SearchResult, SearchType, next_page_size};
use super::AppController;

impl AppController {
    /// Run a search for `text`. Blank text is ignored without touching the network.
    pub async fn search(&self, text: &str, kind: SearchType, page: u32, page_size: u32) {
        match SearchQuery::new(text, kind, page, page_size) {
            Ok(query) => self.run_query(query).await,
            Err(e) => tracing::debug!(error = %e, "Search ignored"),
        }
    }

    /// Search with whatever is in the input box, starting from page 1
    pub async fn submit_search(&self) {
        let ui_state = self.model.get_ui_state().await;
        let page_size = self.model.search_state.lock().await.page_size;
        if ui_state.search_input.trim().is_empty() {
            return;
        }
        self.model.set_active_section(ActiveSection::Results).await;
        self.search(&ui_state.search_input, ui_state.search_type, 1, page_size).await;
    }

    pub async fn change_page(&self, page: u32) {
        let request = self.model.search_state.lock().await.page_request(page);
        match request {
            Ok(query) => self.run_query(query).await,
            Err(e) => tracing::debug!(error = %e, "Page change ignored"),
        }
    }

    pub async fn next_page(&self) {
        let page = self.model.search_state.lock().await.current_page();
        self.change_page(page.saturating_add(1)).await;
    }

    pub async fn prev_page(&self) {
        let page = self.model.search_state.lock().await.current_page();
        self.change_page(page.saturating_sub(1)).await;
    }

    pub async fn first_page(&self) {
        self.change_page(1).await;
    }

    pub async fn last_page(&self) {
        let total_pages = self.model.search_state.lock().await.total_pages();
        self.change_page(total_pages).await;
    }

    /// Switch page size and restart the current search at page 1
    pub async fn change_page_size(&self, page_size: u32) {
        let request = self.model.search_state.lock().await.page_size_request(page_size);
        match request {
            Ok(Some(query)) => self.run_query(query).await,
            Ok(None) => tracing::debug!(page_size, "Page size changed with no active search"),
            Err(e) => tracing::debug!(error = %e, "Page size change ignored"),
        }
    }

    pub async fn cycle_page_size(&self) {
        let current = self.model.search_state.lock().await.page_size;
        self.change_page_size(next_page_size(current)).await;
    }

    async fn run_query(&self, query: SearchQuery) {
        let ticket = self.model.search_state.lock().await.begin(query);
        self.model.reset_result_selection().await;

        let query = &ticket.query;
        tracing::debug!(
            seq = ticket.seq,
            query = %query.text,
            kind = %query.kind,
            page = query.page,
            page_size = query.page_size,
            "Performing search"
        );

        let response = self
            .api
            .search(query.kind, &query.text, query.offset(), query.limit())
            .await;

        let mut state = self.model.search_state.lock().await;
        match response {
            Ok(response) => {
                let result = SearchResult::from_response(response, query.kind, query.offset());
                let (items, total) = (result.items.len(), result.total);
                if state.complete(ticket.seq, result) {
                    tracing::info!(
                        query = %query.text,
                        kind = %query.kind,
                        page = query.page,
                        items,
                        total,
                        "Search completed successfully"
                    );
                } else {
                    tracing::debug!(seq = ticket.seq, "Discarding stale search response");
                }
            }
            Err(e) => {
                let message = Self::format_error(&e);
                if state.fail(ticket.seq, message) {
                    tracing::error!(query = %query.text, error = %e, "Search failed");
                } else {
                    tracing::debug!(seq = ticket.seq, error = %e, "Discarding stale search failure");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::super::testing::{FakeApi, RecordedSearch};
    use super::*;
    use crate::model::{AppModel, SearchItems, SearchStatus};

    fn tracks_body(names: &[&str], total: u32) -> String {
        let items: Vec<String> = names
            .iter()
            .map(|n| format!(r#"{{"id": "{n}", "name": "{n}", "artists": [{{"name": "A"}}], "album": {{"name": "B"}}}}"#))
            .collect();
        format!(r#"{{"tracks": {{"items": [{}], "total": {}}}}}"#, items.join(","), total)
    }

    fn setup(api: FakeApi) -> (AppController, Arc<FakeApi>) {
        let api = Arc::new(api);
        let model = Arc::new(AppModel::new(20));
        (AppController::new(model, api.clone()), api)
    }

    #[tokio::test]
    async fn blank_query_never_dispatches() {
        let (controller, api) = setup(FakeApi::new());
        controller.search("", SearchType::Tracks, 1, 20).await;
        controller.search("   \t", SearchType::Artists, 1, 20).await;
        assert!(api.searches().is_empty());
        assert_eq!(controller.model.get_search_state().await.status, SearchStatus::Idle);
    }

    #[tokio::test]
    async fn results_and_totals_are_recorded() {
        let api = FakeApi::new();
        api.respond("beatles", &tracks_body(&["a", "b", "c"], 57));
        let (controller, api) = setup(api);

        controller.search(" beatles ", SearchType::Tracks, 1, 20).await;

        assert_eq!(
            api.searches(),
            vec![RecordedSearch {
                kind: SearchType::Tracks,
                query: "beatles".to_string(),
                offset: 0,
                limit: 20,
            }]
        );
        let state = controller.model.get_search_state().await;
        assert_eq!(state.status, SearchStatus::Ready);
        assert_eq!(state.total_items(), 57);
        assert_eq!(state.total_pages(), 3);
        assert_eq!(state.result.unwrap().items.len(), 3);
    }

    #[tokio::test]
    async fn search_type_selects_endpoint() {
        let (controller, api) = setup(FakeApi::new());
        controller.search("x", SearchType::Albums, 2, 50).await;
        let recorded = &api.searches()[0];
        assert_eq!((recorded.kind, recorded.offset, recorded.limit), (SearchType::Albums, 50, 50));
        let state = controller.model.get_search_state().await;
        assert_eq!(state.result.unwrap().items, SearchItems::Albums(Vec::new()));
    }

    #[tokio::test]
    async fn change_page_validates_range() {
        let api = FakeApi::new();
        api.respond("q", &tracks_body(&["a"], 57));
        let (controller, api) = setup(api);

        // no current query yet
        controller.change_page(2).await;
        assert!(api.searches().is_empty());

        controller.search("q", SearchType::Tracks, 1, 20).await;
        controller.change_page(0).await;
        controller.change_page(4).await;
        assert_eq!(api.searches().len(), 1);

        controller.change_page(3).await;
        let searches = api.searches();
        assert_eq!(searches.len(), 2);
        assert_eq!(searches[1].offset, 40);
        assert_eq!(controller.model.get_search_state().await.current_page(), 3);
    }

    #[tokio::test]
    async fn next_and_prev_stop_at_edges() {
        let api = FakeApi::new();
        api.respond("q", &tracks_body(&["a"], 30));
        let (controller, api) = setup(api);
        controller.search("q", SearchType::Tracks, 1, 20).await;

        controller.prev_page().await;
        controller.next_page().await;
        controller.next_page().await;
        controller.last_page().await;
        controller.first_page().await;

        let offsets: Vec<u32> = api.searches().iter().map(|s| s.offset).collect();
        assert_eq!(offsets, vec![0, 20, 20, 0]);
    }

    #[tokio::test]
    async fn page_size_change_restarts_at_first_page() {
        let api = FakeApi::new();
        api.respond("q", &tracks_body(&["a"], 200));
        let (controller, api) = setup(api);

        controller.change_page_size(50).await;
        assert!(api.searches().is_empty());

        controller.search("q", SearchType::Tracks, 1, 50).await;
        controller.change_page(3).await;
        controller.change_page_size(10).await;
        controller.change_page_size(15).await;

        let last = api.searches().pop().unwrap();
        assert_eq!((last.offset, last.limit), (0, 10));
        assert_eq!(api.searches().len(), 3);

        controller.cycle_page_size().await;
        assert_eq!(api.searches().pop().unwrap().limit, 20);
    }

    #[tokio::test]
    async fn failure_clears_results_and_next_search_clears_error() {
        let api = FakeApi::new();
        api.respond("good", &tracks_body(&["a"], 1));
        api.fail_with("bad", 500);
        let (controller, _api) = setup(api);

        controller.search("good", SearchType::Tracks, 1, 20).await;
        controller.search("bad", SearchType::Tracks, 1, 20).await;

        let state = controller.model.get_search_state().await;
        assert_eq!(state.error(), Some("API Error: 500 - upstream said no"));
        assert!(state.result.is_none());

        controller.search("good", SearchType::Tracks, 1, 20).await;
        let state = controller.model.get_search_state().await;
        assert_eq!(state.status, SearchStatus::Ready);
    }

    #[tokio::test]
    async fn slow_earlier_search_cannot_overwrite_later_one() {
        let api = FakeApi::new();
        api.respond("slow", &tracks_body(&["old"], 99));
        api.respond("fast", &tracks_body(&["new"], 1));
        let release_slow = api.gate("slow");
        let (controller, api) = setup(api);

        let slow = {
            let controller = controller.clone();
            tokio::spawn(async move { controller.search("slow", SearchType::Tracks, 1, 20).await })
        };
        // wait until the slow request is actually in flight
        while api.searches().is_empty() {
            tokio::time::sleep(Duration::from_millis(1)).await;
        }

        controller.search("fast", SearchType::Tracks, 1, 20).await;
        release_slow.send(()).unwrap();
        slow.await.unwrap();

        let state = controller.model.get_search_state().await;
        assert_eq!(state.query.as_ref().unwrap().text, "fast");
        assert_eq!(state.total_items(), 1);
        let Some(SearchItems::Tracks(tracks)) = state.result.map(|r| r.items) else {
            panic!("expected track results");
        };
        assert_eq!(tracks[0].name, "new");
    }

    #[tokio::test]
    async fn paging_waits_for_in_flight_search() {
        let api = FakeApi::new();
        api.respond("a", &tracks_body(&["a1"], 57));
        api.respond("b", &tracks_body(&["b1"], 5));
        let release_b = api.gate("b");
        let (controller, api) = setup(api);

        controller.search("a", SearchType::Tracks, 1, 20).await;
        let pending = {
            let controller = controller.clone();
            tokio::spawn(async move { controller.search("b", SearchType::Tracks, 1, 20).await })
        };
        while api.searches().len() < 2 {
            tokio::time::sleep(Duration::from_millis(1)).await;
        }

        // "a" had 3 pages, but those pages no longer apply to what is loading
        controller.last_page().await;
        controller.next_page().await;
        controller.change_page(2).await;

        release_b.send(()).unwrap();
        pending.await.unwrap();

        let recorded: Vec<(String, u32)> = api.searches().into_iter().map(|s| (s.query, s.offset)).collect();
        assert_eq!(recorded, vec![("a".to_string(), 0), ("b".to_string(), 0)]);

        let state = controller.model.get_search_state().await;
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.total_pages(), 1);

        controller.last_page().await;
        controller.next_page().await;
        let last = api.searches().pop().unwrap();
        assert_eq!((last.query.as_str(), last.offset), ("b", 0));
        assert!(controller.model.get_search_state().await.current_page() <= 1);
    }

    #[tokio::test]
    async fn submit_uses_input_and_type() {
        let (controller, api) = setup(FakeApi::new());
        controller.submit_search().await;
        assert!(api.searches().is_empty());

        for c in "radiohead".chars() {
            controller.model.append_to_search(c).await;
        }
        controller.model.set_search_type(SearchType::Artists).await;
        controller.submit_search().await;

        let recorded = api.searches();
        assert_eq!(recorded[0].query, "radiohead");
        assert_eq!(recorded[0].kind, SearchType::Artists);
        assert_eq!(controller.model.get_ui_state().await.active_section, ActiveSection::Results);
    }
}
