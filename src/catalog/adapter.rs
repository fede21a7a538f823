//! Adapter layer: Convert catalog DTOs to raw entity models
//!
//! This is the ONLY place where DTO types are converted to domain types.
//! If the Web API changes its response format, only this file and dto.rs
//! need to change.

use super::dto;
use super::domain::{
    CatalogError, EntityKind, ImageRef, RawAlbum, RawArtist, RawTrack, SearchPage, SearchResult,
};

/// Convert a search response into the page for the requested entity kind.
///
/// A response missing the requested key is a contract violation, not an
/// empty result.
pub fn to_search_result(
    response: dto::SearchResponse,
    kind: EntityKind,
) -> Result<SearchResult, CatalogError> {
    match kind {
        EntityKind::Artist => {
            let paging = response.artists.ok_or_else(|| {
                CatalogError::Parse("search response has no `artists` page".to_string())
            })?;
            Ok(SearchResult::Artists(SearchPage {
                total: paging.total,
                items: paging.items.into_iter().flatten().map(to_artist).collect(),
            }))
        }
        EntityKind::Track => {
            let paging = response.tracks.ok_or_else(|| {
                CatalogError::Parse("search response has no `tracks` page".to_string())
            })?;
            Ok(SearchResult::Tracks(SearchPage {
                total: paging.total,
                items: paging.items.into_iter().flatten().map(to_track).collect(),
            }))
        }
    }
}

/// Convert a full artist object
pub fn to_artist(artist: dto::Artist) -> RawArtist {
    RawArtist {
        id: artist.id,
        name: artist.name,
        genres: artist.genres,
        followers: artist.followers.map(|f| f.total).unwrap_or(0),
        popularity: clamp_popularity(artist.popularity),
        images: artist.images.into_iter().map(to_image).collect(),
    }
}

/// Convert a full track object
pub fn to_track(track: dto::Track) -> RawTrack {
    RawTrack {
        id: track.id,
        name: track.name,
        album: RawAlbum {
            name: track.album.name,
            release_date: track.album.release_date.unwrap_or_default(),
            images: track.album.images.into_iter().map(to_image).collect(),
        },
        artists: track.artists.into_iter().map(|a| a.name).collect(),
        duration_ms: track.duration_ms,
        explicit: track.explicit,
        disc_number: track.disc_number,
        track_number: track.track_number,
        popularity: clamp_popularity(track.popularity),
    }
}

fn to_image(image: dto::Image) -> ImageRef {
    ImageRef {
        url: image.url,
        width: image.width,
        height: image.height,
    }
}

/// Scores are documented as 0..=100; anything else is pinned to the range
/// so the classifier only ever sees valid input.
fn clamp_popularity(score: Option<u8>) -> u8 {
    score.unwrap_or(0).min(100)
}
