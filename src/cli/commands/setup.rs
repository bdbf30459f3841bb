//! Credential check and config file commands.

use super::CredentialArgs;
use crate::config::{self, Config};

/// Report whether Spotify credentials are available
pub fn cmd_check_credentials(config: &Config, args: &CredentialArgs) -> anyhow::Result<()> {
    let credentials = args.resolve(config);

    println!("Metadata services:");
    println!("✓ deezer: no credentials needed");

    if credentials.is_complete() {
        println!("✓ spotify: client ID and secret set");
    } else {
        println!("✗ spotify: credentials incomplete");
        if !credentials.has_client_id() {
            println!("  SPOTIFY_CLIENT_ID: not set");
        }
        if !credentials.has_client_secret() {
            println!("  SPOTIFY_CLIENT_SECRET: not set");
        }
        println!("  Create an app at: https://developer.spotify.com/dashboard");
    }

    match config::config_path() {
        Some(path) if path.exists() => println!("\nConfig file: {:?}", path),
        Some(path) => println!("\nConfig file: {:?} (not created, run init-config)", path),
        None => println!("\nConfig file: no config directory on this system"),
    }

    Ok(())
}

/// Write a starter config file
pub fn cmd_init_config(force: bool) -> anyhow::Result<()> {
    let path = config::config_path().ok_or(config::ConfigError::NoConfigDir)?;
    if path.exists() && !force {
        anyhow::bail!("Config file {:?} already exists (use --force to overwrite)", path);
    }

    let path = config::save(&Config::template())?;
    println!("Wrote config file: {:?}", path);
    println!("Edit it to set Spotify credentials and default directories.");
    Ok(())
}
