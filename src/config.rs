//! Configuration system using TOML files.
//!
//! Config is stored in the OS-standard config directory:
//! - Windows: %APPDATA%\music-scout\config.toml
//! - macOS: ~/Library/Application Support/music-scout/config.toml
//! - Linux: ~/.config/music-scout/config.toml
//!
//! Every setting is optional; a missing or broken file means defaults.
//! Credentials given on the command line (or via `SPOTIFY_ID` /
//! `SPOTIFY_PASS`) take precedence over the file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::catalog::{ClientCredentials, ClientOptions, DEFAULT_API_BASE_URL, DEFAULT_TOKEN_URL};
use crate::lookup::{MAX_RELATED_ARTISTS, MAX_RESULTS, SearchSettings};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API credentials
    pub credentials: Credentials,

    /// Catalog service endpoints
    pub catalog: CatalogConfig,

    /// Search behavior
    pub search: SearchConfig,
}

/// API credentials from the developer dashboard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
}

/// Catalog service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Web API root
    pub api_base_url: String,

    /// Token endpoint for client-credentials auth
    pub auth_url: String,

    /// Market for top-track lookups (ISO 3166-1 alpha-2)
    pub market: String,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            auth_url: DEFAULT_TOKEN_URL.to_string(),
            market: "SE".to_string(),
            request_timeout_secs: 10,
        }
    }
}

/// Search settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Records per query (1 to 5)
    pub max_results: usize,

    /// Related artists shown per artist (0 to 3)
    pub related_excerpt: usize,

    /// Artists whose secondary lookups may run at once
    pub concurrency: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: MAX_RESULTS,
            related_excerpt: MAX_RELATED_ARTISTS,
            concurrency: 10,
        }
    }
}

impl Config {
    /// Credentials to use, with command-line values taking precedence over
    /// the file field by field. Blank values count as absent.
    pub fn client_credentials(
        &self,
        client_id: Option<&str>,
        client_secret: Option<&str>,
    ) -> Option<ClientCredentials> {
        let id = prefer(client_id, self.credentials.client_id.as_deref())?;
        let secret = prefer(client_secret, self.credentials.client_secret.as_deref())?;
        Some(ClientCredentials::new(id, secret))
    }

    /// HTTP client settings
    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            api_base_url: self.catalog.api_base_url.clone(),
            token_url: self.catalog.auth_url.clone(),
            timeout: Duration::from_secs(self.catalog.request_timeout_secs.max(1)),
        }
    }

    /// Aggregator settings, clamped to the supported ranges
    pub fn search_settings(&self) -> SearchSettings {
        SearchSettings {
            max_results: self.search.max_results.clamp(1, MAX_RESULTS),
            related_excerpt: self.search.related_excerpt.min(MAX_RELATED_ARTISTS),
            concurrency: self.search.concurrency.max(1),
            market: self.catalog.market.clone(),
        }
    }
}

/// First non-blank value of the two
fn prefer<'a>(flag: Option<&'a str>, file: Option<&'a str>) -> Option<&'a str> {
    let non_blank = |value: Option<&'a str>| value.map(str::trim).filter(|s| !s.is_empty());
    non_blank(flag).or_else(|| non_blank(file))
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("music-scout"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from the default location
///
/// Returns default config if file doesn't exist or can't be parsed.
/// Logs warnings but doesn't fail - we always return a usable config.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        tracing::warn!("Could not determine config directory, using defaults");
        return Config::default();
    };

    load_from(&path)
}

/// Load configuration from a specific file, falling back to defaults
pub fn load_from(path: &Path) -> Config {
    if !path.exists() {
        tracing::debug!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::debug!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::error!("Failed to parse config file {:?}: {}", path, e);
                tracing::warn!("Using default configuration");
                Config::default()
            }
        },
        Err(e) => {
            tracing::error!("Failed to read config file {:?}: {}", path, e);
            Config::default()
        }
    }
}

/// Save configuration to the default location
pub fn save(config: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path().ok_or(ConfigError::NoConfigDir)?;
    save_to(config, &path)?;
    Ok(path)
}

/// Save configuration to a specific file
///
/// Creates the parent directory if it doesn't exist.
pub fn save_to(config: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| ConfigError::CreateDir(dir.to_path_buf(), e))?;
    }

    let contents = toml::to_string_pretty(config).map_err(ConfigError::Serialize)?;

    // Write atomically (write to temp, then rename)
    let temp_path = path.with_extension("toml.tmp");
    std::fs::write(&temp_path, &contents).map_err(|e| ConfigError::Write(temp_path.clone(), e))?;
    std::fs::rename(&temp_path, path)
        .map_err(|e| ConfigError::Rename(temp_path, path.to_path_buf(), e))?;

    tracing::info!("Saved config to {:?}", path);
    Ok(())
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to create config directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(toml::ser::Error),

    #[error("Failed to write config to {0}: {1}")]
    Write(PathBuf, std::io::Error),

    #[error("Failed to rename temp file {0} to {1}: {2}")]
    Rename(PathBuf, PathBuf, std::io::Error),
}

// ============================================================================
// Tests
// ============================================================================
