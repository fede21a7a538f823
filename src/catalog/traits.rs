//! Trait definition for the catalog client.
//!
//! The lookup pipeline only talks to [`CatalogApi`], so tests can substitute
//! a mock. Production code uses [`SpotifyClient`](super::SpotifyClient).
//!
//! # Example
//!
//! ```ignore
//! use music_scout::catalog::CatalogApi;
//!
//! // In production code:
//! async fn first_artist<C: CatalogApi + ?Sized>(client: &C) {
//!     let result = client.search("Penkin", EntityKind::Artist, 5).await?;
//! }
//!
//! // In tests:
//! let mock = MockCatalog::with_artists(vec![...]);
//! ```

use async_trait::async_trait;

use super::domain::{CatalogError, EntityKind, RawArtist, RawTrack, SearchResult};

/// The four catalog operations the lookup pipeline depends on.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Primary search, at most `limit` items
    async fn search(
        &self,
        query: &str,
        kind: EntityKind,
        limit: u32,
    ) -> Result<SearchResult, CatalogError>;

    /// Artists related to `artist_id`
    async fn related_artists(&self, artist_id: &str) -> Result<Vec<RawArtist>, CatalogError>;

    /// Top tracks of `artist_id` in `market`
    async fn top_tracks(&self, artist_id: &str, market: &str)
    -> Result<Vec<RawTrack>, CatalogError>;

    /// Raw (still encoded) image bytes
    async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, CatalogError>;
}

#[async_trait]
impl CatalogApi for super::client::SpotifyClient {
    async fn search(
        &self,
        query: &str,
        kind: EntityKind,
        limit: u32,
    ) -> Result<SearchResult, CatalogError> {
        self.search(query, kind, limit).await
    }

    async fn related_artists(&self, artist_id: &str) -> Result<Vec<RawArtist>, CatalogError> {
        self.related_artists(artist_id).await
    }

    async fn top_tracks(
        &self,
        artist_id: &str,
        market: &str,
    ) -> Result<Vec<RawTrack>, CatalogError> {
        self.top_tracks(artist_id, market).await
    }

    async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, CatalogError> {
        self.fetch_image(url).await
    }
}
