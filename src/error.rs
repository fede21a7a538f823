//! Application-wide error types.
//!
//! Library modules use specific error types via `thiserror`
//! ([`CatalogError`], [`ConfigError`]); CLI commands return this crate-level
//! [`Error`], and `main` uses `anyhow` for the final report.
//!
//! # Example
//!
//! ```ignore
//! use music_scout::error::{Error, Result, ResultExt};
//!
//! fn run(client: &SpotifyClient) -> Result<()> {
//!     rt.block_on(client.check_credentials())
//!         .with_context("while checking credentials")?;
//!     Ok(())
//! }
//! ```

use crate::catalog::CatalogError;
use crate::config::ConfigError;

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Catalog request failed
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Output serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Blank search query
    #[error("Please enter a name of a song/artist")]
    EmptyQuery,

    /// No client id/secret anywhere
    #[error(
        "Missing client credentials: pass --client-id/--client-secret, set SPOTIFY_ID/SPOTIFY_PASS, or add them to the config file"
    )]
    MissingCredentials,

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Add context to an error.
    pub fn context(self, ctx: impl Into<String>) -> Self {
        Self::WithContext {
            context: ctx.into(),
            source: Box::new(self),
        }
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn with_context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, CatalogError> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Catalog(e).context(ctx))
    }
}
