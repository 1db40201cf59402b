//! Error types for the search client

use thiserror::Error;

/// Failures talking to the music search API
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response reached us: connection refused, DNS failure, timeout
    #[error("Network error: Could not connect to the music service")]
    Network(#[source] reqwest::Error),

    /// The server answered with a non-2xx status
    #[error("API Error: {status} - {body}")]
    Upstream { status: u16, body: String },

    /// The server answered 2xx but the body was not the expected JSON
    #[error("Request error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Request error: failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl ApiError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::Network(e) if e.is_timeout())
    }
}

/// Search requests rejected before anything is dispatched
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("search query is empty")]
    EmptyQuery,

    #[error("page {page} is outside 1..={total_pages}")]
    PageOutOfRange { page: u32, total_pages: u32 },

    #[error("unsupported page size {0} (expected 10, 20 or 50)")]
    PageSize(u32),

    #[error("a search is still in flight")]
    SearchInFlight,
}
