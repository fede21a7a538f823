//! Test utilities and fixtures for music-scout tests.
//!
//! Factories for raw catalog entities and encoded test images, so tests
//! only spell out the fields they care about.
//!
//! # Example
//!
//! ```ignore
//! use crate::test_utils::{mock_artist, png_bytes};
//!
//! let artist = RawArtist {
//!     popularity: 90,
//!     ..mock_artist("a1", "Queen")
//! };
//! ```

use std::io::Cursor;

use crate::catalog::{ImageRef, RawAlbum, RawArtist, RawTrack};

/// Creates a RawArtist with sensible defaults and no images.
pub fn mock_artist(id: &str, name: &str) -> RawArtist {
    RawArtist {
        id: id.to_string(),
        name: name.to_string(),
        genres: vec!["pop".to_string()],
        followers: 1_000,
        popularity: 50,
        images: vec![],
    }
}

/// Creates a RawTrack with sensible defaults and no album art.
pub fn mock_track(id: &str, name: &str) -> RawTrack {
    RawTrack {
        id: id.to_string(),
        name: name.to_string(),
        album: RawAlbum {
            name: "Test Album".to_string(),
            release_date: "2020-01-01".to_string(),
            images: vec![],
        },
        artists: vec!["Test Artist".to_string()],
        duration_ms: 180_000,
        explicit: false,
        disc_number: 1,
        track_number: 1,
        popularity: 50,
    }
}

/// An image reference with no size information.
pub fn image_ref(url: &str) -> ImageRef {
    ImageRef {
        url: url.to_string(),
        width: None,
        height: None,
    }
}

/// A valid PNG of the given size, for image decoding tests.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = image::DynamicImage::new_rgb8(width, height);
    let mut out = Cursor::new(Vec::new());
    image
        .write_to(&mut out, image::ImageFormat::Png)
        .expect("Failed to encode test PNG");
    out.into_inner()
}
