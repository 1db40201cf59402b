//! Catalog data returned by the search API and the result shape the UI consumes

use serde::Deserialize;

use super::types::SearchType;

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Image {
    pub url: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

/// Artist reference embedded in tracks and albums
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ArtistRef {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct TrackAlbum {
    pub name: String,
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Track {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<ArtistRef>,
    #[serde(default)]
    pub album: TrackAlbum,
    #[serde(default)]
    pub duration_ms: u32,
    #[serde(default)]
    pub popularity: u8,
    #[serde(default)]
    pub preview_url: Option<String>,
}

impl Track {
    pub fn artist_names(&self) -> String {
        join_artist_names(&self.artists)
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Followers {
    #[serde(default)]
    pub total: u64,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Artist {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub followers: Followers,
    #[serde(default)]
    pub popularity: u8,
    #[serde(default)]
    pub genres: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Album {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub artists: Vec<ArtistRef>,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub total_tracks: u32,
    #[serde(default)]
    pub album_type: String,
    #[serde(default)]
    pub popularity: Option<u8>,
}

impl Album {
    pub fn artist_names(&self) -> String {
        join_artist_names(&self.artists)
    }
}

fn join_artist_names(artists: &[ArtistRef]) -> String {
    artists
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// One page of items as the API returns it
#[derive(Clone, Debug, Deserialize)]
pub struct Paging<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub total: Option<u32>,
}

/// Raw body of any `/search/{kind}` response. Only the field for the
/// requested kind is expected to be present.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub tracks: Option<Paging<Track>>,
    #[serde(default)]
    pub artists: Option<Paging<Artist>>,
    #[serde(default)]
    pub albums: Option<Paging<Album>>,
}

/// Items of a single search page
#[derive(Clone, Debug, PartialEq)]
pub enum SearchItems {
    Tracks(Vec<Track>),
    Artists(Vec<Artist>),
    Albums(Vec<Album>),
}

impl SearchItems {
    pub fn empty(kind: SearchType) -> Self {
        match kind {
            SearchType::Tracks => Self::Tracks(Vec::new()),
            SearchType::Artists => Self::Artists(Vec::new()),
            SearchType::Albums => Self::Albums(Vec::new()),
        }
    }

    pub fn kind(&self) -> SearchType {
        match self {
            Self::Tracks(_) => SearchType::Tracks,
            Self::Artists(_) => SearchType::Artists,
            Self::Albums(_) => SearchType::Albums,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Tracks(items) => items.len(),
            Self::Artists(items) => items.len(),
            Self::Albums(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A page of results plus the catalog-wide match count
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult {
    pub items: SearchItems,
    pub total: u32,
}

impl SearchResult {
    /// Extract the page for `kind` from a raw response.
    ///
    /// When the server omits `total`, the count falls back to
    /// `offset + items.len()`, the lowest total consistent with the page we
    /// were just given.
    pub fn from_response(response: SearchResponse, kind: SearchType, offset: u32) -> Self {
        fn split<T>(paging: Option<Paging<T>>) -> (Vec<T>, Option<u32>) {
            paging.map(|p| (p.items, p.total)).unwrap_or_default()
        }

        let (items, total) = match kind {
            SearchType::Tracks => {
                let (items, total) = split(response.tracks);
                (SearchItems::Tracks(items), total)
            }
            SearchType::Artists => {
                let (items, total) = split(response.artists);
                (SearchItems::Artists(items), total)
            }
            SearchType::Albums => {
                let (items, total) = split(response.albums);
                (SearchItems::Albums(items), total)
            }
        };

        let total = match total {
            Some(total) => total,
            None => {
                let fallback = offset.saturating_add(items.len() as u32);
                tracing::warn!(
                    kind = %kind,
                    fallback,
                    "Search response has no total, pagination may undercount"
                );
                fallback
            }
        };

        Self { items, total }
    }
}
