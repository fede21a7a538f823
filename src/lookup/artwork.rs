//! Image resolver - turns an optional artwork URL into a decoded image.
//!
//! Missing artwork is normal, so nothing here fails: every problem degrades
//! to `None`. Logging keeps the two kinds of absence apart: an unsupported
//! format is expected and logged at debug; a failed fetch is unexpected and
//! logged at warn.

use image::DynamicImage;

use crate::catalog::{CatalogApi, CatalogError};

/// Fetches and decodes artwork through the catalog client.
pub struct ImageResolver<'a, C: CatalogApi + ?Sized> {
    catalog: &'a C,
}

impl<'a, C: CatalogApi + ?Sized> ImageResolver<'a, C> {
    pub fn new(catalog: &'a C) -> Self {
        Self { catalog }
    }

    /// Resolve an image URL. Returns `None` without any request when `url`
    /// is absent.
    pub async fn resolve(&self, url: Option<&str>) -> Option<DynamicImage> {
        let url = url?;

        let data = match self.catalog.fetch_image(url).await {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!("Image fetch failed for {}: {}", url, e);
                return None;
            }
        };

        match decode(&data) {
            Ok(image) => Some(image),
            Err(e) => {
                tracing::debug!("Skipping image {}: {}", url, e);
                None
            }
        }
    }
}

/// Decode image bytes, sniffing the format from the content
pub fn decode(data: &[u8]) -> Result<DynamicImage, CatalogError> {
    image::load_from_memory(data).map_err(|e| CatalogError::UnsupportedFormat(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::traits::mocks::MockCatalog;
    use crate::test_utils::png_bytes;

    #[tokio::test]
    async fn test_absent_url_makes_no_request() {
        let mock = MockCatalog::with_artists(vec![]);
        let resolver = ImageResolver::new(&mock);

        assert!(resolver.resolve(None).await.is_none());
        assert!(mock.recorded_calls().is_empty());
    }

    #[tokio::test]
    async fn test_decodes_png() {
        let mock = MockCatalog::with_artists(vec![]).image("https://img/a.png", Ok(png_bytes(4, 3)));
        let resolver = ImageResolver::new(&mock);

        let image = resolver.resolve(Some("https://img/a.png")).await.unwrap();

        assert_eq!((image.width(), image.height()), (4, 3));
    }

    #[tokio::test]
    async fn test_unsupported_format_is_none() {
        let mock = MockCatalog::with_artists(vec![])
            .image("https://img/a.webx", Ok(b"definitely not an image".to_vec()));
        let resolver = ImageResolver::new(&mock);

        assert!(resolver.resolve(Some("https://img/a.webx")).await.is_none());
    }

    #[tokio::test]
    async fn test_transport_failure_is_none() {
        let mock = MockCatalog::with_artists(vec![])
            .image("https://img/a.png", Err(CatalogError::Transport("reset".to_string())));
        let resolver = ImageResolver::new(&mock);

        assert!(resolver.resolve(Some("https://img/a.png")).await.is_none());
    }

    #[test]
    fn test_decode_error_kind() {
        assert!(matches!(decode(&[0, 1, 2]), Err(CatalogError::UnsupportedFormat(_))));
    }
}
