//! Playlist Minder - builds album playlists and organized album copies.
//!
//! Scans a music tree, writes one m3u playlist per album folder, and copies
//! each album to an output directory together with cover art and a metadata
//! file looked up on Deezer or Spotify. A separate `retag` command gathers a
//! folder into one numbered album and rewrites its tags.

pub mod cli;
pub mod config;
pub mod cover;
pub mod enrichment;
pub mod error;
pub mod metadata;
pub mod model;
pub mod organizer;
pub mod playlist;
pub mod scanner;
#[cfg(test)]
pub mod test_utils;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env().add_directive("playlist_minder=info".parse()?))
        .init();

    cli::run_command(&args)
}
