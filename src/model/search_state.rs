//! Search and pagination state with reducer-style transitions.
//!
//! Every transition is a plain method on [`SearchState`]; the controller only
//! sequences them around the network call. Responses are matched against the
//! ticket they were issued with so a slow earlier request can never overwrite
//! the result of a later one.

use crate::error::InvalidInput;

use super::content::SearchResult;
use super::pagination::{self, DEFAULT_PAGE_SIZE};
use super::types::SearchType;

/// Parameters of one search request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
    pub kind: SearchType,
    pub page: u32,
    pub page_size: u32,
}

impl SearchQuery {
    pub fn new(text: &str, kind: SearchType, page: u32, page_size: u32) -> Result<Self, InvalidInput> {
        let text = text.trim();
        if text.is_empty() {
            return Err(InvalidInput::EmptyQuery);
        }
        if !pagination::is_valid_page_size(page_size) {
            return Err(InvalidInput::PageSize(page_size));
        }
        if page == 0 {
            return Err(InvalidInput::PageOutOfRange { page, total_pages: 0 });
        }
        Ok(Self {
            text: text.to_string(),
            kind,
            page,
            page_size,
        })
    }

    pub fn offset(&self) -> u32 {
        pagination::offset_for(self.page, self.page_size)
    }

    pub fn limit(&self) -> u32 {
        self.page_size
    }

    fn with_page(&self, page: u32, page_size: u32) -> Self {
        Self {
            text: self.text.clone(),
            kind: self.kind,
            page,
            page_size,
        }
    }
}

/// Handle for an in-flight request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestTicket {
    pub seq: u64,
    pub query: SearchQuery,
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum SearchStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

#[derive(Clone, Debug)]
pub struct SearchState {
    /// Most recently issued query, whether or not it has completed
    pub query: Option<SearchQuery>,
    /// Query that produced `result`; lags `query` while a request is in flight
    pub shown_query: Option<SearchQuery>,
    pub result: Option<SearchResult>,
    pub status: SearchStatus,
    pub page_size: u32,
    latest_seq: u64,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl SearchState {
    pub fn new(page_size: u32) -> Self {
        let page_size = if pagination::is_valid_page_size(page_size) {
            page_size
        } else {
            DEFAULT_PAGE_SIZE
        };
        Self {
            query: None,
            shown_query: None,
            result: None,
            status: SearchStatus::Idle,
            page_size,
            latest_seq: 0,
        }
    }

    /// Page of the displayed result, falling back to the pending query
    pub fn current_page(&self) -> u32 {
        self.shown_query
            .as_ref()
            .or(self.query.as_ref())
            .map_or(1, |q| q.page)
    }

    pub fn total_items(&self) -> u32 {
        self.result.as_ref().map_or(0, |r| r.total)
    }

    /// Page count of the displayed result, using the page size it was fetched with
    pub fn total_pages(&self) -> u32 {
        let page_size = self.shown_query.as_ref().map_or(self.page_size, |q| q.page_size);
        pagination::total_pages(self.total_items(), page_size)
    }

    /// 1-based item range of the displayed page
    pub fn shown_range(&self) -> Option<(u32, u32)> {
        let query = self.shown_query.as_ref()?;
        pagination::shown_range(query.page, query.page_size, self.total_items())
    }

    /// Offset of the first displayed item
    pub fn shown_offset(&self) -> u32 {
        self.shown_query.as_ref().map_or(0, SearchQuery::offset)
    }

    pub fn is_loading(&self) -> bool {
        self.status == SearchStatus::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            SearchStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_latest(&self, seq: u64) -> bool {
        seq == self.latest_seq
    }

    /// Start a new request. Supersedes anything still in flight.
    pub fn begin(&mut self, query: SearchQuery) -> RequestTicket {
        self.latest_seq += 1;
        self.page_size = query.page_size;
        self.query = Some(query.clone());
        self.status = SearchStatus::Loading;
        RequestTicket {
            seq: self.latest_seq,
            query,
        }
    }

    /// Apply a successful response. Returns `false` if the ticket is stale
    /// and the result was discarded.
    pub fn complete(&mut self, seq: u64, result: SearchResult) -> bool {
        if !self.is_latest(seq) {
            return false;
        }
        self.shown_query = self.query.clone();
        self.result = Some(result);
        self.status = SearchStatus::Ready;
        true
    }

    /// Apply a failed response. Prior results are dropped.
    pub fn fail(&mut self, seq: u64, message: String) -> bool {
        if !self.is_latest(seq) {
            return false;
        }
        self.shown_query = None;
        self.result = None;
        self.status = SearchStatus::Failed(message);
        true
    }

    /// Query for `page` of the displayed result, validated against its page count.
    /// Refused while another request is in flight.
    pub fn page_request(&self, page: u32) -> Result<SearchQuery, InvalidInput> {
        if self.is_loading() {
            return Err(InvalidInput::SearchInFlight);
        }
        let query = self.shown_query.as_ref().ok_or(InvalidInput::EmptyQuery)?;
        let total_pages = self.total_pages();
        if page == 0 || page > total_pages {
            return Err(InvalidInput::PageOutOfRange { page, total_pages });
        }
        Ok(query.with_page(page, query.page_size))
    }

    /// Switch page size. Returns the page-1 query to run if there is a
    /// current search.
    pub fn page_size_request(&mut self, page_size: u32) -> Result<Option<SearchQuery>, InvalidInput> {
        if !pagination::is_valid_page_size(page_size) {
            return Err(InvalidInput::PageSize(page_size));
        }
        self.page_size = page_size;
        Ok(self.query.as_ref().map(|q| q.with_page(1, page_size)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::content::SearchItems;

    fn result_with_total(total: u32) -> SearchResult {
        SearchResult {
            items: SearchItems::Tracks(Vec::new()),
            total,
        }
    }

    fn query(text: &str, page: u32) -> SearchQuery {
        SearchQuery::new(text, SearchType::Tracks, page, 20).unwrap()
    }

    #[test]
    fn blank_queries_are_rejected() {
        assert_eq!(SearchQuery::new("", SearchType::Tracks, 1, 20), Err(InvalidInput::EmptyQuery));
        assert_eq!(SearchQuery::new(" \t\n", SearchType::Albums, 1, 20), Err(InvalidInput::EmptyQuery));
    }

    #[test]
    fn query_is_trimmed_and_offset_computed() {
        let q = SearchQuery::new("  radiohead ", SearchType::Artists, 3, 50).unwrap();
        assert_eq!(q.text, "radiohead");
        assert_eq!(q.offset(), 100);
        assert_eq!(q.limit(), 50);
    }

    #[test]
    fn bad_page_size_is_rejected() {
        assert_eq!(SearchQuery::new("x", SearchType::Tracks, 1, 15), Err(InvalidInput::PageSize(15)));
    }

    #[test]
    fn begin_sets_loading_and_clears_error() {
        let mut state = SearchState::default();
        let t = state.begin(query("a", 1));
        assert!(state.fail(t.seq, "boom".into()));
        assert_eq!(state.error(), Some("boom"));

        state.begin(query("a", 1));
        assert!(state.is_loading());
        assert_eq!(state.error(), None);
    }

    #[test]
    fn complete_recomputes_total_pages() {
        let mut state = SearchState::default();
        let t = state.begin(query("a", 1));
        assert!(state.complete(t.seq, result_with_total(57)));
        assert_eq!(state.total_items(), 57);
        assert_eq!(state.total_pages(), 3);
        assert_eq!(state.status, SearchStatus::Ready);
    }

    #[test]
    fn stale_responses_are_discarded() {
        let mut state = SearchState::default();
        let slow = state.begin(query("slow", 1));
        let fast = state.begin(query("fast", 1));

        assert!(state.complete(fast.seq, result_with_total(5)));
        assert!(!state.complete(slow.seq, result_with_total(999)));
        assert!(!state.fail(slow.seq, "late".into()));

        assert_eq!(state.total_items(), 5);
        assert_eq!(state.query.as_ref().unwrap().text, "fast");
        assert_eq!(state.status, SearchStatus::Ready);
    }

    #[test]
    fn failure_drops_previous_results() {
        let mut state = SearchState::default();
        let t = state.begin(query("a", 1));
        state.complete(t.seq, result_with_total(40));
        let t = state.begin(query("a", 2));
        assert!(state.fail(t.seq, "nope".into()));
        assert!(state.result.is_none());
        assert_eq!(state.total_pages(), 0);
    }

    #[test]
    fn page_request_respects_bounds() {
        let mut state = SearchState::default();
        assert_eq!(state.page_request(1), Err(InvalidInput::EmptyQuery));

        let t = state.begin(query("a", 1));
        state.complete(t.seq, result_with_total(57));

        assert_eq!(state.page_request(0), Err(InvalidInput::PageOutOfRange { page: 0, total_pages: 3 }));
        assert_eq!(state.page_request(4), Err(InvalidInput::PageOutOfRange { page: 4, total_pages: 3 }));

        let next = state.page_request(3).unwrap();
        assert_eq!(next.page, 3);
        assert_eq!(next.offset(), 40);
        assert_eq!(next.text, "a");
    }

    #[test]
    fn page_request_refused_while_newer_search_loads() {
        let mut state = SearchState::default();
        let t = state.begin(query("a", 1));
        state.complete(t.seq, result_with_total(57));

        state.begin(query("b", 1));
        assert_eq!(state.page_request(3), Err(InvalidInput::SearchInFlight));
        // the displayed pair is untouched until the new response lands
        assert_eq!(state.shown_query.as_ref().unwrap().text, "a");
        assert_eq!(state.total_pages(), 3);
    }

    #[test]
    fn completion_moves_displayed_query() {
        let mut state = SearchState::default();
        let t = state.begin(query("a", 1));
        state.complete(t.seq, result_with_total(57));
        let t = state.begin(query("b", 1));
        state.complete(t.seq, result_with_total(5));

        assert_eq!(state.shown_query.as_ref().unwrap().text, "b");
        assert_eq!(state.total_pages(), 1);
        assert_eq!(state.page_request(3), Err(InvalidInput::PageOutOfRange { page: 3, total_pages: 1 }));
        assert_eq!(state.page_request(1).unwrap().text, "b");
    }

    #[test]
    fn page_count_uses_size_of_displayed_page() {
        let mut state = SearchState::default();
        let t = state.begin(query("a", 2));
        state.complete(t.seq, result_with_total(57));
        assert_eq!(state.shown_range(), Some((21, 40)));
        assert_eq!(state.shown_offset(), 20);

        // the preferred size moving on does not reflow the page already shown
        state.page_size = 50;
        assert_eq!(state.total_pages(), 3);
        assert_eq!(state.shown_range(), Some((21, 40)));
    }

    #[test]
    fn page_size_change_resets_to_first_page() {
        let mut state = SearchState::default();
        assert_eq!(state.page_size_request(50), Ok(None));
        assert_eq!(state.page_size, 50);

        let t = state.begin(SearchQuery::new("a", SearchType::Albums, 2, 50).unwrap());
        state.complete(t.seq, result_with_total(200));

        let q = state.page_size_request(10).unwrap().unwrap();
        assert_eq!((q.page, q.page_size, q.kind), (1, 10, SearchType::Albums));
        assert_eq!(state.page_size_request(11), Err(InvalidInput::PageSize(11)));
    }
}
