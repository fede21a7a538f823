//! Plain-text rendering of search records.

use image::DynamicImage;

use crate::lookup::{ArtistRecord, NormalizedRecord, TrackRecord};

/// Numbered list of records, each followed by its detail lines
pub fn render_records(records: &[NormalizedRecord]) -> String {
    let mut out = String::new();

    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("[{}] {}\n", i + 1, record.name()));
        out.push_str(&match record {
            NormalizedRecord::Artist(artist) => render_artist(artist),
            NormalizedRecord::Track(track) => render_track(track),
        });
    }

    out
}

/// Detail lines for an artist. Empty sections are omitted.
pub fn render_artist(artist: &ArtistRecord) -> String {
    let mut out = String::new();

    out.push_str(&format!("  Artist Name: {}\n", artist.name));
    if !artist.genres.is_empty() {
        out.push_str(&format!("  Genres: {}\n", artist.genres.join(", ")));
    }
    if let Some(top) = &artist.top_track {
        out.push_str(&format!("  Top Song: {}\n", top));
    }
    if !artist.related_artists.is_empty() {
        out.push_str(&format!("  Related Artists: {}\n", artist.related_artists.join(", ")));
    }
    out.push_str(&format!("  Followers: {}\n", artist.followers));
    out.push_str(&format!("  Artist Popularity: {}\n", artist.popularity));
    if let Some(image) = &artist.image {
        out.push_str(&format!("  Image: {}\n", dimensions(image)));
    }

    out
}

/// Detail lines for a track
pub fn render_track(track: &TrackRecord) -> String {
    let mut out = String::new();

    out.push_str(&format!("  Song Name: {}\n", track.name));
    out.push_str(&format!("  Album Name: {}\n", track.album));
    out.push_str(&format!("  Album Release Date: {}\n", track.release_date));
    if !track.artists.is_empty() {
        out.push_str(&format!("  Artists Involved: {}\n", track.artists.join(", ")));
    }
    out.push_str(&format!("  Length: {}\n", track.length()));
    out.push_str(&format!("  Explicit?: {}\n", track.explicit_label()));
    out.push_str(&format!("  Disc Number: {}\n", track.disc_number));
    out.push_str(&format!("  Track Number: {}\n", track.track_number));
    out.push_str(&format!("  Track Popularity: {}\n", track.popularity));
    if let Some(image) = &track.album_image {
        out.push_str(&format!("  Album Image: {}\n", dimensions(image)));
    }

    out
}

fn dimensions(image: &DynamicImage) -> String {
    format!("{}x{}", image.width(), image.height())
}
