//! Model module - Application state and data types
//!
//! This module contains all the data structures and state management for the application.
//! It is organized into submodules by responsibility:
//!
//! - `types`: Core type definitions (enums, UI state, etc.)
//! - `content`: Catalog items and the search response/result shapes
//! - `pagination`: Page arithmetic and the page-number window
//! - `search_state`: Search query/result state and its transitions
//! - `visualizer`: Frame state for the animated bars
//! - `api_client`: Search API client
//! - `app_model`: Main application model with state management methods

mod types;
mod content;
mod pagination;
mod search_state;
mod visualizer;
mod api_client;
mod app_model;

pub use types::{ActiveSection, SearchType, ServiceStatus, UiState};

pub use content::{Album, Artist, SearchItems, SearchResponse, SearchResult, Track};

pub use pagination::{
    next_page_size, page_window, should_show_pagination, PageLabel,
    DEFAULT_PAGE_SIZE, PAGE_SIZES,
};

pub use search_state::{SearchQuery, SearchState, SearchStatus};

pub use visualizer::{VisualizerFrame, DEFAULT_BARS};

pub use api_client::{HttpMusicApi, MusicApi};

pub use app_model::AppModel;
