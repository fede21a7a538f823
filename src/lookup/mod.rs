//! Lookup pipeline - turns a user query into display-ready records.
//!
//! Given a query and a [`SearchMode`], the [`SearchAggregator`] runs the
//! primary search, fans out secondary lookups for artists, and normalizes
//! every result into a [`NormalizedRecord`]. Presentation code consumes
//! only those records, never raw catalog entities.
//!
//! # Usage
//!
//! ```ignore
//! use lookup::{SearchAggregator, SearchMode, SearchSettings};
//!
//! let client = SpotifyClient::new(Some(credentials));
//! let aggregator = SearchAggregator::new(client, SearchSettings::default());
//!
//! let records = aggregator.search("Penkin", SearchMode::Artist).await?;
//! if records.is_empty() {
//!     println!("No results");
//! }
//! ```

mod aggregator;
pub mod artwork;
pub mod duration;
mod normalize;
pub mod popularity;
mod record;

pub use aggregator::{MAX_RESULTS, SearchAggregator, SearchSettings};
pub use duration::format_duration;
pub use normalize::{MAX_RELATED_ARTISTS, Normalizer};
pub use popularity::{Popularity, classify};
pub use record::{ArtistRecord, NormalizedRecord, SearchMode, SecondaryResultSet, TrackRecord};
