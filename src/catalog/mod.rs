//! Catalog client - talks to the remote music catalog web service.
//!
//! # Architecture
//!
//! Layered so the wire format never leaks into the pipeline:
//! - **Domain models** (`domain.rs`) - Raw entities the lookup pipeline consumes
//! - **API DTOs** (`dto.rs`) - Exact API response shapes
//! - **Adapter** (`adapter.rs`) - Converts DTOs to domain models
//! - **Auth** (`auth.rs`) - Client-credentials token handling
//! - **Client** (`client.rs`) - HTTP client for the web API
//! - **Traits** (`traits.rs`) - The seam the pipeline depends on
//!
//! Credentials are handed to the client at construction; nothing in here
//! reads the process environment.

mod adapter;
pub mod auth;
mod client;
pub mod domain;
pub mod dto;
pub mod traits;

pub use auth::ClientCredentials;
pub use client::{ClientOptions, DEFAULT_API_BASE_URL, DEFAULT_TOKEN_URL, SpotifyClient};
pub use domain::{
    CatalogError, EntityKind, ImageRef, RawAlbum, RawArtist, RawTrack, SearchPage, SearchResult,
};
pub use traits::CatalogApi;
