//! Config file helpers.

use crate::config::{self, Config, ConfigError};
use crate::error::Result;

/// Print where the config file is (or would be) stored
pub fn cmd_config_path() -> Result<()> {
    let path = config::config_path().ok_or(ConfigError::NoConfigDir)?;
    println!("{}", path.display());
    if !path.exists() {
        println!("(not created yet, run `init-config` to write defaults)");
    }
    Ok(())
}

/// Write a default config file so credentials can be filled in
pub fn cmd_init_config(force: bool) -> Result<()> {
    let path = config::config_path().ok_or(ConfigError::NoConfigDir)?;

    if path.exists() && !force {
        println!("Config already exists at {}", path.display());
        println!("Use --force to overwrite it.");
        return Ok(());
    }

    let written = config::save(&Config::default())?;
    println!("Wrote default config to {}", written.display());
    println!("Add your client_id and client_secret under [credentials].");
    Ok(())
}
