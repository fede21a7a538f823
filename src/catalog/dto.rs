//! Spotify Web API Data Transfer Objects
//!
//! These types match what the Web API returns for the endpoints we call.
//! DO NOT use these types outside the catalog module - convert to domain types.
//!
//! API Reference: https://developer.spotify.com/documentation/web-api

use serde::{Deserialize, Serialize};

/// Response from `/search`. Only the requested type's key is present.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResponse {
    pub artists: Option<Paging<Artist>>,
    pub tracks: Option<Paging<Track>>,
}

/// Paging object wrapping a list of items
///
/// The API occasionally sends `null` in place of an item; those slots
/// deserialize to `None` and are dropped by the adapter.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Paging<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<Option<T>>,
    /// Total number of matches available
    pub total: u32,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub next: Option<String>,
}

/// Full artist object
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
    pub followers: Option<Followers>,
    pub popularity: Option<u8>,
    #[serde(default)]
    pub images: Vec<Image>,
}

/// Simplified artist (credited on a track)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtistSimplified {
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Followers {
    pub total: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Image {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Simplified album embedded in a track
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Album {
    pub name: String,
    pub release_date: Option<String>,
    /// "year", "month" or "day"
    pub release_date_precision: Option<String>,
    #[serde(default)]
    pub images: Vec<Image>,
}

/// Full track object
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub album: Album,
    #[serde(default)]
    pub artists: Vec<ArtistSimplified>,
    pub duration_ms: u64,
    #[serde(default)]
    pub explicit: bool,
    #[serde(default = "default_number")]
    pub disc_number: u32,
    #[serde(default = "default_number")]
    pub track_number: u32,
    pub popularity: Option<u8>,
}

fn default_number() -> u32 {
    1
}

/// Response from `/artists/{id}/related-artists`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RelatedArtistsResponse {
    #[serde(default)]
    pub artists: Vec<Artist>,
}

/// Response from `/artists/{id}/top-tracks`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TopTracksResponse {
    #[serde(default)]
    pub tracks: Vec<Track>,
}

/// Response from the accounts token endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    /// Lifetime in seconds
    pub expires_in: u64,
}

/// Error body returned by the Web API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiError {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiErrorDetail {
    pub status: u16,
    pub message: String,
}

/// Error body returned by the accounts (token) endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthError {
    pub error: String,
    pub error_description: Option<String>,
}

#[cfg(test)]
mod contract_tests {
    use super::*;

    #[test]
    fn test_parse_artist_search() {
        let json = r#"{
            "artists": {
                "href": "https://api.spotify.com/v1/search?query=penkin&type=artist&limit=5",
                "items": [{
                    "external_urls": {"spotify": "https://open.spotify.com/artist/abc"},
                    "followers": {"href": null, "total": 1234},
                    "genres": ["russian pop", "chanson"],
                    "id": "abc",
                    "images": [],
                    "name": "Penkin",
                    "popularity": 17,
                    "type": "artist",
                    "uri": "spotify:artist:abc"
                }],
                "limit": 5,
                "next": null,
                "offset": 0,
                "previous": null,
                "total": 1
            }
        }"#;

        let response: SearchResponse =
            serde_json::from_str(json).expect("Should parse artist search");

        let artists = response.artists.expect("artists key present");
        assert!(response.tracks.is_none());
        assert_eq!(artists.total, 1);
        let artist = artists.items[0].as_ref().expect("first item present");
        assert_eq!(artist.name, "Penkin");
        assert_eq!(artist.genres, vec!["russian pop", "chanson"]);
        assert_eq!(artist.followers.as_ref().map(|f| f.total), Some(1234));
        assert!(artist.images.is_empty());
    }

    #[test]
    fn test_parse_track_search() {
        let json = r#"{
            "tracks": {
                "items": [{
                    "album": {
                        "name": "A Night at the Opera",
                        "release_date": "1975-11-21",
                        "release_date_precision": "day",
                        "images": [{"url": "https://i.scdn.co/image/x", "width": 640, "height": 640}]
                    },
                    "artists": [{"id": "q", "name": "Queen"}],
                    "disc_number": 1,
                    "duration_ms": 354320,
                    "explicit": false,
                    "id": "t1",
                    "name": "Bohemian Rhapsody",
                    "popularity": 85,
                    "track_number": 11
                }],
                "total": 900
            }
        }"#;

        let response: SearchResponse =
            serde_json::from_str(json).expect("Should parse track search");

        let tracks = response.tracks.expect("tracks key present");
        assert_eq!(tracks.total, 900);
        let track = tracks.items[0].as_ref().expect("first item present");
        assert_eq!(track.album.release_date.as_deref(), Some("1975-11-21"));
        assert_eq!(track.album.images[0].width, Some(640));
        assert_eq!(track.track_number, 11);
        assert_eq!(track.artists[0].name, "Queen");
    }

    #[test]
    fn test_parse_page_with_null_items() {
        let json = r#"{
            "tracks": {
                "items": [null, {"id": "t1", "name": "Song", "album": {"name": "Album"}, "duration_ms": 1000}],
                "total": 2
            }
        }"#;

        let response: SearchResponse =
            serde_json::from_str(json).expect("Should parse page containing null");

        let tracks = response.tracks.expect("tracks key present");
        assert_eq!(tracks.items.len(), 2);
        assert!(tracks.items[0].is_none());
        assert_eq!(tracks.items[1].as_ref().map(|t| t.name.as_str()), Some("Song"));
    }

    #[test]
    fn test_parse_page_without_items() {
        let page: Paging<Artist> =
            serde_json::from_str(r#"{"total": 0}"#).expect("Should parse empty page");
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_parse_track_missing_optional_fields() {
        let json = r#"{
            "id": "t2",
            "name": "Untitled",
            "album": {"name": "Demo"},
            "duration_ms": 1000
        }"#;

        let track: Track = serde_json::from_str(json).expect("Should parse minimal track");
        assert!(!track.explicit);
        assert_eq!(track.disc_number, 1);
        assert!(track.artists.is_empty());
        assert!(track.popularity.is_none());
    }

    #[test]
    fn test_parse_related_and_top_tracks() {
        let related: RelatedArtistsResponse =
            serde_json::from_str(r#"{"artists": []}"#).expect("Should parse related");
        assert!(related.artists.is_empty());

        let top: TopTracksResponse =
            serde_json::from_str(r#"{"tracks": []}"#).expect("Should parse top tracks");
        assert!(top.tracks.is_empty());
    }

    #[test]
    fn test_parse_api_error() {
        let json = r#"{"error": {"status": 401, "message": "The access token expired"}}"#;
        let err: ApiError = serde_json::from_str(json).expect("Should parse error body");
        assert_eq!(err.error.status, 401);
        assert_eq!(err.error.message, "The access token expired");
    }

    #[test]
    fn test_parse_token() {
        let json = r#"{"access_token": "tok", "token_type": "Bearer", "expires_in": 3600}"#;
        let token: TokenResponse = serde_json::from_str(json).expect("Should parse token");
        assert_eq!(token.expires_in, 3600);
    }
}
