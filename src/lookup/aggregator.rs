//! Search aggregator - orchestrates one user query end to end:
//! 1. Primary search (at most five items)
//! 2. For artists: related-artists and top-tracks lookups per result, all
//!    issued concurrently
//! 3. Normalization of every result (artwork fetched concurrently)
//!
//! Records always come back in primary search order. Secondary results are
//! keyed by the index of the artist they belong to and merged by index, so
//! completion order never matters.
//!
//! Failure policy: the primary search failing fails the whole call. A failed
//! secondary lookup only empties that artist's related/top-track fields.

use std::collections::HashMap;

use futures::StreamExt;
use futures::future::join_all;

use super::normalize::{MAX_RELATED_ARTISTS, Normalizer};
use super::record::{NormalizedRecord, SearchMode, SecondaryResultSet};
use crate::catalog::{CatalogApi, CatalogError, RawArtist, SearchPage, SearchResult};

/// Hard ceiling on records per query
pub const MAX_RESULTS: usize = 5;

/// Tuning for the aggregator
#[derive(Debug, Clone)]
pub struct SearchSettings {
    /// Records per query, clamped to 1..=5
    pub max_results: usize,
    /// Related artists kept per record, clamped to 0..=3
    pub related_excerpt: usize,
    /// Secondary lookups (per artist) allowed in flight at once
    pub concurrency: usize,
    /// Market for top-track lookups (ISO 3166-1 alpha-2)
    pub market: String,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            max_results: MAX_RESULTS,
            related_excerpt: MAX_RELATED_ARTISTS,
            concurrency: 10,
            market: "SE".to_string(),
        }
    }
}

impl SearchSettings {
    fn result_limit(&self) -> usize {
        self.max_results.clamp(1, MAX_RESULTS)
    }
}

/// Turns a query into normalized records.
///
/// Holds no per-query state: every [`search`](Self::search) call owns its
/// working data, so concurrent searches on one aggregator don't interact.
pub struct SearchAggregator<C: CatalogApi> {
    catalog: C,
    settings: SearchSettings,
}

impl<C: CatalogApi> SearchAggregator<C> {
    pub fn new(catalog: C, settings: SearchSettings) -> Self {
        Self { catalog, settings }
    }

    #[cfg(test)]
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Run a search. No matches is an empty list, not an error.
    ///
    /// Fails only when the primary search fails (auth, transport, ...).
    pub async fn search(
        &self,
        query: &str,
        mode: SearchMode,
    ) -> Result<Vec<NormalizedRecord>, CatalogError> {
        let limit = self.settings.result_limit();
        tracing::info!("Searching for {:?} matching {:?}", mode, query);

        let result = self.catalog.search(query, mode.into(), limit as u32).await?;
        let normalizer = Normalizer::new(&self.catalog, self.settings.related_excerpt);

        let records = match (mode, result) {
            (SearchMode::Artist, SearchResult::Artists(page)) => {
                let artists = take_available(page, limit);
                self.artist_records(&normalizer, artists).await
            }
            (SearchMode::Track, SearchResult::Tracks(page)) => {
                let tracks = take_available(page, limit);
                join_all(tracks.into_iter().map(|track| normalizer.track(track)))
                    .await
                    .into_iter()
                    .map(NormalizedRecord::Track)
                    .collect()
            }
            (mode, _) => {
                return Err(CatalogError::Parse(format!(
                    "search for {:?} returned a different entity kind",
                    mode
                )));
            }
        };

        tracing::info!("Search for {:?} produced {} record(s)", query, records.len());
        Ok(records)
    }

    /// Fan out secondary lookups for every artist, then assemble in order
    async fn artist_records(
        &self,
        normalizer: &Normalizer<'_, C>,
        artists: Vec<RawArtist>,
    ) -> Vec<NormalizedRecord> {
        let mut secondary: HashMap<usize, SecondaryResultSet> =
            futures::stream::iter(artists.iter().enumerate().map(|(index, artist)| async move {
                (index, self.secondary_lookups(artist).await)
            }))
            .buffer_unordered(self.settings.concurrency.max(1))
            .collect()
            .await;

        join_all(artists.into_iter().enumerate().map(|(index, artist)| {
            let lookups = secondary.remove(&index);
            normalizer.artist(artist, lookups)
        }))
        .await
        .into_iter()
        .map(NormalizedRecord::Artist)
        .collect()
    }

    /// Related artists and top tracks for one artist, run concurrently.
    /// Each lookup that fails degrades to an empty list.
    async fn secondary_lookups(&self, artist: &RawArtist) -> SecondaryResultSet {
        if artist.id.is_empty() {
            tracing::warn!("Artist {:?} has no identifier, skipping lookups", artist.name);
            return SecondaryResultSet::default();
        }

        let (related, top) = futures::join!(
            self.catalog.related_artists(&artist.id),
            self.catalog.top_tracks(&artist.id, &self.settings.market),
        );

        let related_artists = related.unwrap_or_else(|e| {
            tracing::warn!("Related artists lookup failed for {:?}: {}", artist.name, e);
            Vec::new()
        });
        let top_tracks = top.unwrap_or_else(|e| {
            tracing::warn!("Top tracks lookup failed for {:?}: {}", artist.name, e);
            Vec::new()
        });

        SecondaryResultSet {
            related_artists,
            top_tracks,
        }
    }
}

/// The first `min(total, limit)` items of a page
fn take_available<T>(page: SearchPage<T>, limit: usize) -> Vec<T> {
    let available = (page.total as usize).min(limit);
    let mut items = page.items;
    items.truncate(available);
    items
}
