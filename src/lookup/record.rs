//! Display-ready records produced by the lookup pipeline.
//!
//! These are the only shapes handed to presentation code; raw catalog
//! entities never leave the `lookup` module.

use image::DynamicImage;
use serde::{Serialize, Serializer};

use super::duration::format_duration;
use super::popularity::Popularity;
use crate::catalog::{EntityKind, RawArtist, RawTrack};

/// What the user is searching for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    Artist,
    Track,
}

impl From<SearchMode> for EntityKind {
    fn from(mode: SearchMode) -> Self {
        match mode {
            SearchMode::Artist => EntityKind::Artist,
            SearchMode::Track => EntityKind::Track,
        }
    }
}

/// Secondary lookup results for one artist
#[derive(Debug, Clone, Default)]
pub struct SecondaryResultSet {
    pub related_artists: Vec<RawArtist>,
    pub top_tracks: Vec<RawTrack>,
}

/// One normalized search result
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NormalizedRecord {
    Artist(ArtistRecord),
    Track(TrackRecord),
}

impl NormalizedRecord {
    /// Name shown in result lists
    pub fn name(&self) -> &str {
        match self {
            NormalizedRecord::Artist(artist) => &artist.name,
            NormalizedRecord::Track(track) => &track.name,
        }
    }
}

/// Artist details
#[derive(Debug, Clone, Serialize)]
pub struct ArtistRecord {
    pub name: String,
    pub genres: Vec<String>,
    pub followers: u64,
    pub popularity: Popularity,
    /// At most three names, in catalog order
    pub related_artists: Vec<String>,
    pub top_track: Option<String>,
    #[serde(serialize_with = "image_summary")]
    pub image: Option<DynamicImage>,
}

/// Track details
#[derive(Debug, Clone, Serialize)]
pub struct TrackRecord {
    pub name: String,
    pub album: String,
    /// Exactly as supplied by the catalog, not reparsed
    pub release_date: String,
    pub artists: Vec<String>,
    pub duration_ms: u64,
    pub explicit: bool,
    pub disc_number: u32,
    pub track_number: u32,
    pub popularity: Popularity,
    #[serde(serialize_with = "image_summary")]
    pub album_image: Option<DynamicImage>,
}

impl TrackRecord {
    /// Length as `HH:MM:SS`
    pub fn length(&self) -> String {
        format_duration(self.duration_ms)
    }

    /// "Yes" or "No"
    pub fn explicit_label(&self) -> &'static str {
        if self.explicit { "Yes" } else { "No" }
    }
}

#[derive(Serialize)]
struct ImageSummary {
    width: u32,
    height: u32,
}

/// Images are summarized by their dimensions when serialized
fn image_summary<S: Serializer>(image: &Option<DynamicImage>, s: S) -> Result<S::Ok, S::Error> {
    image
        .as_ref()
        .map(|img| ImageSummary {
            width: img.width(),
            height: img.height(),
        })
        .serialize(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track_record(explicit: bool) -> TrackRecord {
        TrackRecord {
            name: "Song".to_string(),
            album: "Album".to_string(),
            release_date: "1999".to_string(),
            artists: vec![],
            duration_ms: 3_725_000,
            explicit,
            disc_number: 1,
            track_number: 2,
            popularity: Popularity::Popular,
            album_image: None,
        }
    }

    #[test]
    fn test_mode_to_entity_kind() {
        assert_eq!(EntityKind::from(SearchMode::Artist), EntityKind::Artist);
        assert_eq!(EntityKind::from(SearchMode::Track), EntityKind::Track);
    }

    #[test]
    fn test_track_display_helpers() {
        assert_eq!(track_record(true).explicit_label(), "Yes");
        assert_eq!(track_record(false).explicit_label(), "No");
        assert_eq!(track_record(false).length(), "01:02:05");
    }

    #[test]
    fn test_json_shape() {
        let record = NormalizedRecord::Artist(ArtistRecord {
            name: "Penkin".to_string(),
            genres: vec![],
            followers: 7,
            popularity: Popularity::NotPopular,
            related_artists: vec![],
            top_track: None,
            image: Some(DynamicImage::new_rgb8(2, 5)),
        });

        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["kind"], "artist");
        assert_eq!(json["popularity"], "Not popular");
        assert_eq!(json["related_artists"], serde_json::json!([]));
        assert!(json["top_track"].is_null());
        assert_eq!(json["image"]["width"], 2);
        assert_eq!(json["image"]["height"], 5);
    }
}
