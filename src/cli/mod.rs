//! Command-line interface for music-scout.
//!
//! Artist and track searches, plus a few helpers for managing credentials
//! and the config file.

mod commands;
mod render;

pub use commands::{Cli, Commands, run_command};
