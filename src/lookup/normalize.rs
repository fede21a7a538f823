//! Record normalizer: one raw catalog entity (plus its secondary lookups)
//! in, one flat display record out.
//!
//! Upstream ordering is kept everywhere (genres, credited artists, related
//! artists). The only I/O is artwork, delegated to the [`ImageResolver`].

use super::artwork::ImageResolver;
use super::popularity::classify;
use super::record::{ArtistRecord, SecondaryResultSet, TrackRecord};
use crate::catalog::{CatalogApi, ImageRef, RawArtist, RawTrack};

/// Upper bound on the related-artist excerpt
pub const MAX_RELATED_ARTISTS: usize = 3;

pub struct Normalizer<'a, C: CatalogApi + ?Sized> {
    images: ImageResolver<'a, C>,
    related_limit: usize,
}

impl<'a, C: CatalogApi + ?Sized> Normalizer<'a, C> {
    /// `related_limit` is capped at [`MAX_RELATED_ARTISTS`].
    pub fn new(catalog: &'a C, related_limit: usize) -> Self {
        Self {
            images: ImageResolver::new(catalog),
            related_limit: related_limit.min(MAX_RELATED_ARTISTS),
        }
    }

    /// Build an artist record. Missing secondary data yields empty
    /// related artists and no top track.
    pub async fn artist(
        &self,
        artist: RawArtist,
        secondary: Option<SecondaryResultSet>,
    ) -> ArtistRecord {
        let secondary = secondary.unwrap_or_default();
        let image = self.images.resolve(first_url(&artist.images)).await;

        ArtistRecord {
            related_artists: related_excerpt(&secondary.related_artists, self.related_limit),
            top_track: top_track_name(&secondary.top_tracks),
            popularity: classify(artist.popularity),
            name: artist.name,
            genres: artist.genres,
            followers: artist.followers,
            image,
        }
    }

    /// Build a track record. Tracks need no secondary data.
    pub async fn track(&self, track: RawTrack) -> TrackRecord {
        let album_image = self.images.resolve(first_url(&track.album.images)).await;

        TrackRecord {
            popularity: classify(track.popularity),
            name: track.name,
            album: track.album.name,
            release_date: track.album.release_date,
            artists: track.artists,
            duration_ms: track.duration_ms,
            explicit: track.explicit,
            disc_number: track.disc_number,
            track_number: track.track_number,
            album_image,
        }
    }
}

/// Names of the first `limit` related artists, in given order
pub fn related_excerpt(related: &[RawArtist], limit: usize) -> Vec<String> {
    related
        .iter()
        .take(limit)
        .map(|artist| artist.name.clone())
        .collect()
}

/// Name of the first top track, if any
pub fn top_track_name(tracks: &[RawTrack]) -> Option<String> {
    tracks.first().map(|track| track.name.clone())
}

fn first_url(images: &[ImageRef]) -> Option<&str> {
    images.first().map(|image| image.url.as_str())
}
