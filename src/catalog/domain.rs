//! Internal models for catalog entities.
//!
//! These types are OUR types - they don't change when the catalog API changes.
//! All API responses get converted into these types via the adapter.

/// Which kind of entity a primary search asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Artist,
    Track,
}

impl EntityKind {
    /// Value of the `type` query parameter
    pub fn as_query_type(self) -> &'static str {
        match self {
            EntityKind::Artist => "artist",
            EntityKind::Track => "track",
        }
    }
}

/// One page of primary search results
#[derive(Debug, Clone)]
pub struct SearchPage<T> {
    /// Items in the order the catalog ranked them
    pub items: Vec<T>,
    /// Total matches available upstream (may exceed `items.len()`)
    pub total: u32,
}

impl<T> SearchPage<T> {
    /// An empty page with no matches
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }
}

/// Primary search result, tagged by the entity kind that was requested
#[derive(Debug, Clone)]
pub enum SearchResult {
    Artists(SearchPage<RawArtist>),
    Tracks(SearchPage<RawTrack>),
}

/// Reference to a remote image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Artist as returned by the catalog
#[derive(Debug, Clone, Default)]
pub struct RawArtist {
    /// Catalog identifier, drives the secondary lookups
    pub id: String,
    pub name: String,
    pub genres: Vec<String>,
    pub followers: u64,
    /// Popularity score (0 to 100)
    pub popularity: u8,
    /// Images in the order the catalog lists them (largest first upstream)
    pub images: Vec<ImageRef>,
}

/// Album a track belongs to
#[derive(Debug, Clone, Default)]
pub struct RawAlbum {
    pub name: String,
    /// Release date exactly as supplied ("1975", "1975-10", "1975-10-31")
    pub release_date: String,
    pub images: Vec<ImageRef>,
}

/// Track as returned by the catalog
#[derive(Debug, Clone, Default)]
pub struct RawTrack {
    pub id: String,
    pub name: String,
    pub album: RawAlbum,
    /// Contributing artist names, credited order
    pub artists: Vec<String>,
    pub duration_ms: u64,
    pub explicit: bool,
    pub disc_number: u32,
    pub track_number: u32,
    /// Popularity score (0 to 100)
    pub popularity: u8,
}

/// Errors raised by the catalog client
#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Rate limited - try again later")]
    RateLimited,

    #[error("API request failed (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Resource not found")]
    NotFound,

    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_type() {
        assert_eq!(EntityKind::Artist.as_query_type(), "artist");
        assert_eq!(EntityKind::Track.as_query_type(), "track");
    }

    #[test]
    fn test_empty_page() {
        let page: SearchPage<RawArtist> = SearchPage::empty();
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
    }

    #[test]
    fn test_error_display() {
        let err = CatalogError::Api {
            status: 502,
            message: "Bad gateway".to_string(),
        };
        assert_eq!(err.to_string(), "API request failed (HTTP 502): Bad gateway");
    }
}
