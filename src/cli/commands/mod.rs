//! CLI command definitions and dispatch.
//!
//! Each group of subcommands lives in its own submodule:
//! - `search`: artist/track searches and credential checks
//! - `setup`: config file helpers

mod search;
mod setup;

use clap::{Args, Parser, Subcommand};
use tokio::runtime::Runtime;

use crate::config;
use crate::error::Error;
use crate::lookup::SearchMode;

pub use search::{cmd_check_credentials, cmd_search};
pub use setup::{cmd_config_path, cmd_init_config};

/// Printed when the query is blank
pub(crate) const EMPTY_QUERY_MESSAGE: &str = "Please enter a name of a song/artist";

/// Printed when the catalog has nothing for the query
pub(crate) const NO_RESULTS_MESSAGE: &str = "Name yielded no results. Please enter in another one.";

/// Music Scout CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Search for artists by name
    Artist {
        /// Artist name to search for
        query: String,
        #[command(flatten)]
        options: SearchArgs,
    },
    /// Search for tracks by name
    Track {
        /// Song name to search for
        query: String,
        #[command(flatten)]
        options: SearchArgs,
    },
    /// Verify that the client credentials are accepted
    CheckCredentials {
        #[command(flatten)]
        auth: AuthArgs,
    },
    /// Print the config file location
    ConfigPath,
    /// Write a config file with default settings
    InitConfig {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

/// Client credentials, overriding the config file
#[derive(Args, Debug, Clone, Default)]
pub struct AuthArgs {
    /// Client ID (or set SPOTIFY_ID env var)
    #[arg(long, env = "SPOTIFY_ID")]
    pub client_id: Option<String>,
    /// Client secret (or set SPOTIFY_PASS env var)
    #[arg(long, env = "SPOTIFY_PASS", hide_env_values = true)]
    pub client_secret: Option<String>,
}

/// Options shared by the search commands
#[derive(Args, Debug, Clone, Default)]
pub struct SearchArgs {
    #[command(flatten)]
    pub auth: AuthArgs,
    /// Market for top tracks, e.g. SE or US (default from config)
    #[arg(short, long)]
    pub market: Option<String>,
    /// Print records as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Run the specified CLI command.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let config = config::load();

    match &cli.command {
        Commands::Artist { query, options } => {
            let rt = Runtime::new()?;
            exit_on_empty_query(cmd_search(&rt, SearchMode::Artist, query, options, &config))?;
        }
        Commands::Track { query, options } => {
            let rt = Runtime::new()?;
            exit_on_empty_query(cmd_search(&rt, SearchMode::Track, query, options, &config))?;
        }
        Commands::CheckCredentials { auth } => {
            let rt = Runtime::new()?;
            cmd_check_credentials(&rt, auth, &config)?;
        }
        Commands::ConfigPath => cmd_config_path()?,
        Commands::InitConfig { force } => cmd_init_config(*force)?,
    }

    Ok(())
}

/// A blank query is a usage problem: prompt and exit with status 2
fn exit_on_empty_query(result: crate::error::Result<()>) -> crate::error::Result<()> {
    if let Err(Error::EmptyQuery) = result {
        eprintln!("{}", EMPTY_QUERY_MESSAGE);
        std::process::exit(2);
    }
    result
}
