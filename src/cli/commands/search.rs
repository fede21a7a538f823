//! Artist/track search and credential check commands.

use tokio::runtime::Runtime;

use super::{AuthArgs, NO_RESULTS_MESSAGE, SearchArgs};
use crate::catalog::SpotifyClient;
use crate::cli::render;
use crate::config::Config;
use crate::error::{Error, Result, ResultExt};
use crate::lookup::{NormalizedRecord, SearchAggregator, SearchMode};

/// Search for artists or tracks and print the records
pub fn cmd_search(
    rt: &Runtime,
    mode: SearchMode,
    query: &str,
    options: &SearchArgs,
    config: &Config,
) -> Result<()> {
    let query = validate_query(query).ok_or(Error::EmptyQuery)?;

    let records = rt
        .block_on(run_search(config, mode, query, options))
        .with_context(format!("Search for {:?} failed", query))?;

    print!("{}", format_output(&records, options.json)?);
    Ok(())
}

/// Trimmed query, or `None` when nothing is left to search for
pub(crate) fn validate_query(query: &str) -> Option<&str> {
    let query = query.trim();
    (!query.is_empty()).then_some(query)
}

/// Verify credentials by fetching an access token
pub fn cmd_check_credentials(rt: &Runtime, auth: &AuthArgs, config: &Config) -> Result<()> {
    let credentials = config
        .client_credentials(auth.client_id.as_deref(), auth.client_secret.as_deref())
        .ok_or(Error::MissingCredentials)?;
    let client = SpotifyClient::with_options(Some(credentials), config.client_options());

    println!("Requesting access token from {}...", config.catalog.auth_url);
    rt.block_on(client.check_credentials())
        .with_context("Credential check failed")?;
    println!("✓ Credentials accepted");
    Ok(())
}

/// Build the client and aggregator from config, then run one query
pub(crate) async fn run_search(
    config: &Config,
    mode: SearchMode,
    query: &str,
    options: &SearchArgs,
) -> Result<Vec<NormalizedRecord>> {
    let auth = &options.auth;
    let credentials = config
        .client_credentials(auth.client_id.as_deref(), auth.client_secret.as_deref())
        .ok_or(Error::MissingCredentials)?;

    let mut settings = config.search_settings();
    if let Some(market) = options.market.as_deref().filter(|m| !m.trim().is_empty()) {
        settings.market = market.trim().to_uppercase();
    }

    let client = SpotifyClient::with_options(Some(credentials), config.client_options());
    let aggregator = SearchAggregator::new(client, settings);

    Ok(aggregator.search(query, mode).await?)
}

/// Text or JSON rendering of a result set
pub(crate) fn format_output(records: &[NormalizedRecord], json: bool) -> Result<String> {
    if json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(records)?));
    }

    if records.is_empty() {
        return Ok(format!("{}\n", NO_RESULTS_MESSAGE));
    }

    Ok(render::render_records(records))
}
