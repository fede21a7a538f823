//! Music Scout - look up artists and tracks in the Spotify catalog.
//!
//! A query returns up to five results. Artists come with genres, followers,
//! a popularity band, their top track and a few related artists; tracks come
//! with album, length, credits and popularity.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod lookup;
#[cfg(test)]
pub mod test_utils;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Logs go to stderr so stdout stays clean for records
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("music_scout=info".parse()?))
        .init();

    cli::run_command(&args)
}
