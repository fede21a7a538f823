//! Spotify Web API HTTP client
//!
//! Handles communication with the catalog web service.
//! See: https://developer.spotify.com/documentation/web-api
//!
//! Every API request carries a client-credentials bearer token (see `auth`).
//! A 401 from the API usually means the cached token was revoked early, so
//! the request is retried once with a fresh token before giving up.
//! Timeouts are enforced here, on the HTTP client; callers never add their own.

use std::time::Duration;

use serde::de::DeserializeOwned;

use super::auth::{ClientCredentials, TokenProvider};
use super::domain::{CatalogError, EntityKind, RawArtist, RawTrack, SearchResult};
use super::{adapter, dto};

pub const DEFAULT_API_BASE_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Connection settings for [`SpotifyClient`]
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub api_base_url: String,
    pub token_url: String,
    pub timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Catalog API client
pub struct SpotifyClient {
    http_client: reqwest::Client,
    base_url: String,
    tokens: TokenProvider,
}

impl SpotifyClient {
    /// Create a client against the public service.
    ///
    /// Credentials are optional so the client can be built before they are
    /// known; any request without them fails with [`CatalogError::Auth`].
    pub fn new(credentials: Option<ClientCredentials>) -> Self {
        Self::with_options(credentials, ClientOptions::default())
    }

    /// Create a client with custom endpoints and timeout
    pub fn with_options(credentials: Option<ClientCredentials>, options: ClientOptions) -> Self {
        let http_client = reqwest::Client::builder()
            .gzip(true)
            .user_agent(USER_AGENT)
            .timeout(options.timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            base_url: options.api_base_url.trim_end_matches('/').to_string(),
            tokens: TokenProvider::new(credentials, options.token_url),
        }
    }

    /// Create a client for testing, with both endpoints on one mock server
    #[cfg(test)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self::with_options(
            Some(ClientCredentials::new("test-id", "test-secret")),
            ClientOptions {
                api_base_url: format!("{}/v1", base_url),
                token_url: format!("{}/api/token", base_url),
                timeout: Duration::from_secs(5),
            },
        )
    }

    /// Verify the credentials by obtaining an access token
    pub async fn check_credentials(&self) -> Result<(), CatalogError> {
        self.tokens.bearer(&self.http_client).await.map(|_| ())
    }

    /// Search the catalog for artists or tracks
    pub async fn search(
        &self,
        query: &str,
        kind: EntityKind,
        limit: u32,
    ) -> Result<SearchResult, CatalogError> {
        let url = format!(
            "{}/search?q={}&type={}&limit={}",
            self.base_url,
            urlencoding::encode(query),
            kind.as_query_type(),
            limit
        );

        let response: dto::SearchResponse = self.get_json(&url).await?;
        adapter::to_search_result(response, kind)
    }

    /// Artists similar to the given one, as ranked by the catalog
    pub async fn related_artists(&self, artist_id: &str) -> Result<Vec<RawArtist>, CatalogError> {
        let url = format!(
            "{}/artists/{}/related-artists",
            self.base_url,
            urlencoding::encode(artist_id)
        );

        let response: dto::RelatedArtistsResponse = self.get_json(&url).await?;
        Ok(response.artists.into_iter().map(adapter::to_artist).collect())
    }

    /// An artist's most popular tracks in a market (ISO 3166-1 alpha-2)
    pub async fn top_tracks(
        &self,
        artist_id: &str,
        market: &str,
    ) -> Result<Vec<RawTrack>, CatalogError> {
        let url = format!(
            "{}/artists/{}/top-tracks?market={}",
            self.base_url,
            urlencoding::encode(artist_id),
            urlencoding::encode(market)
        );

        let response: dto::TopTracksResponse = self.get_json(&url).await?;
        Ok(response.tracks.into_iter().map(adapter::to_track).collect())
    }

    /// Download the raw bytes of an image. Image hosts need no token.
    pub async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, CatalogError> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound);
        }

        if !status.is_success() {
            return Err(CatalogError::Transport(format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let data = response
            .bytes()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        Ok(data.to_vec())
    }

    /// Send an authorized GET and decode the JSON body
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, CatalogError> {
        let mut retried = false;

        loop {
            let bearer = self.tokens.bearer(&self.http_client).await?;

            let response = self
                .http_client
                .get(url)
                .bearer_auth(&bearer)
                .send()
                .await
                .map_err(|e| CatalogError::Transport(e.to_string()))?;

            if response.status() == reqwest::StatusCode::UNAUTHORIZED && !retried {
                tracing::debug!("Access token rejected, requesting a new one");
                self.tokens.invalidate().await;
                retried = true;
                continue;
            }

            return Self::decode(response).await;
        }
    }

    /// Map the HTTP status to our error taxonomy, then parse the body
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, CatalogError> {
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            let message = match response.json::<dto::ApiError>().await {
                Ok(body) => body.error.message,
                Err(_) => format!("HTTP {}", status),
            };
            return Err(CatalogError::Auth(message));
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(CatalogError::RateLimited);
        }

        if !status.is_success() {
            let message = match response.json::<dto::ApiError>().await {
                Ok(body) => body.error.message,
                Err(_) => status.canonical_reason().unwrap_or("Unknown").to_string(),
            };
            return Err(CatalogError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))
    }
}
