//! Core type definitions for the application

use std::fmt;

/// Which section of the UI is currently active/focused
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveSection {
    Search,
    Results,
}

impl ActiveSection {
    pub fn next(self) -> Self {
        match self {
            ActiveSection::Search => ActiveSection::Results,
            ActiveSection::Results => ActiveSection::Search,
        }
    }

    pub fn prev(self) -> Self {
        // Only two sections, so cycling backwards lands on the same one
        self.next()
    }
}

/// Catalog category a search is run against
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SearchType {
    #[default]
    Tracks,
    Artists,
    Albums,
}

impl SearchType {
    pub const ALL: [SearchType; 3] = [SearchType::Tracks, SearchType::Artists, SearchType::Albums];

    /// Path segment under `/search/`
    pub fn path(self) -> &'static str {
        match self {
            Self::Tracks => "tracks",
            Self::Artists => "artists",
            Self::Albums => "albums",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Tracks => "Tracks",
            Self::Artists => "Artists",
            Self::Albums => "Albums",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Tracks => "🎵",
            Self::Artists => "🎤",
            Self::Albums => "💿",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Tracks => Self::Artists,
            Self::Artists => Self::Albums,
            Self::Albums => Self::Tracks,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Tracks => Self::Albums,
            Self::Artists => Self::Tracks,
            Self::Albums => Self::Artists,
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Reachability of the search backend, as reported by `/health`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ServiceStatus {
    #[default]
    Checking,
    Healthy,
    Unavailable,
}

impl ServiceStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Checking => "checking",
            Self::Healthy => "healthy",
            Self::Unavailable => "unavailable",
        }
    }
}

/// UI state for the application
#[derive(Clone, Debug)]
pub struct UiState {
    pub active_section: ActiveSection,
    pub search_input: String,
    pub search_type: SearchType,
    pub result_selected: usize,
    pub service_status: ServiceStatus,
    pub show_help_popup: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            active_section: ActiveSection::Search,
            search_input: String::new(),
            search_type: SearchType::default(),
            result_selected: 0,
            service_status: ServiceStatus::default(),
            show_help_popup: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_type_cycles_through_all_kinds() {
        let mut kind = SearchType::Tracks;
        for expected in [SearchType::Artists, SearchType::Albums, SearchType::Tracks] {
            kind = kind.next();
            assert_eq!(kind, expected);
        }
        assert_eq!(SearchType::Tracks.prev(), SearchType::Albums);
    }

    #[test]
    fn search_type_paths_match_endpoints() {
        let paths: Vec<_> = SearchType::ALL.iter().map(|k| k.path()).collect();
        assert_eq!(paths, ["tracks", "artists", "albums"]);
    }
}
