//! Client-credentials authentication
//!
//! The Web API requires a bearer token obtained from the accounts service
//! with the application's client id and secret. Tokens live for an hour;
//! we fetch one lazily and reuse it until shortly before it expires.

use std::time::{Duration, Instant};

use tokio::sync::Mutex;

use super::domain::CatalogError;
use super::dto;

/// Refresh this long before the advertised expiry
const EXPIRY_MARGIN: Duration = Duration::from_secs(60);

/// Application credentials issued by the developer dashboard
#[derive(Clone)]
pub struct ClientCredentials {
    pub client_id: String,
    pub client_secret: String,
}

impl ClientCredentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

// Never print the secret.
impl std::fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

struct AccessToken {
    value: String,
    expires_at: Instant,
}

impl AccessToken {
    fn is_fresh(&self) -> bool {
        Instant::now() + EXPIRY_MARGIN < self.expires_at
    }
}

/// Hands out bearer tokens, fetching a new one when needed.
///
/// Concurrent callers wait on the lock, so a burst of requests triggers a
/// single token fetch.
pub struct TokenProvider {
    credentials: Option<ClientCredentials>,
    token_url: String,
    cached: Mutex<Option<AccessToken>>,
}

impl TokenProvider {
    pub fn new(credentials: Option<ClientCredentials>, token_url: impl Into<String>) -> Self {
        Self {
            credentials,
            token_url: token_url.into(),
            cached: Mutex::new(None),
        }
    }

    /// Get a valid bearer token, requesting one if none is cached
    pub async fn bearer(&self, http: &reqwest::Client) -> Result<String, CatalogError> {
        let mut cached = self.cached.lock().await;

        if let Some(token) = cached.as_ref()
            && token.is_fresh()
        {
            return Ok(token.value.clone());
        }

        let token = self.request_token(http).await?;
        let value = token.value.clone();
        *cached = Some(token);
        Ok(value)
    }

    /// Drop the cached token so the next call fetches a fresh one
    pub async fn invalidate(&self) {
        self.cached.lock().await.take();
    }

    async fn request_token(&self, http: &reqwest::Client) -> Result<AccessToken, CatalogError> {
        let credentials = self.credentials.as_ref().ok_or_else(|| {
            CatalogError::Auth("no client credentials configured".to_string())
        })?;

        tracing::debug!("Requesting access token from {}", self.token_url);

        let response = http
            .post(&self.token_url)
            .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::BAD_REQUEST
            || status == reqwest::StatusCode::UNAUTHORIZED
        {
            let message = match response.json::<dto::AuthError>().await {
                Ok(body) => body.error_description.unwrap_or(body.error),
                Err(_) => format!("HTTP {}", status),
            };
            return Err(CatalogError::Auth(message));
        }

        if !status.is_success() {
            return Err(CatalogError::Transport(format!(
                "token endpoint returned HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let token = response
            .json::<dto::TokenResponse>()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))?;

        Ok(AccessToken {
            value: token.access_token,
            expires_at: Instant::now() + Duration::from_secs(token.expires_in),
        })
    }
}
