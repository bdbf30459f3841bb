//! CLI command definitions and dispatch.
//!
//! Each group of subcommands is implemented in its own submodule:
//! - `organize`: Playlists and album copies from a music tree
//! - `retag`: Single-album copy with numbered names and rewritten tags
//! - `setup`: Credential checks and config file creation

mod organize;
mod retag;
mod setup;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tokio::runtime::Runtime;

use crate::config::{self, Config};
use crate::enrichment::{MetadataService, ServiceCredentials};

pub use organize::{cmd_copy, cmd_organize, cmd_playlists};
pub use retag::cmd_retag;
pub use setup::{cmd_check_credentials, cmd_init_config};

/// Playlist Minder CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Write playlists, then copy albums with art and metadata (default)
    Organize {
        #[command(flatten)]
        dirs: DirArgs,
        #[command(flatten)]
        service: ServiceArgs,
    },
    /// Write one .m3u playlist per album
    Playlists {
        /// Music directory to scan
        #[arg(short, long)]
        music_dir: Option<PathBuf>,
        /// Directory to write playlists into
        #[arg(short, long)]
        playlist_dir: Option<PathBuf>,
    },
    /// Copy albums into an output directory with art and metadata
    Copy {
        /// Music directory to scan
        #[arg(short, long)]
        music_dir: Option<PathBuf>,
        /// Directory to copy albums into
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
        #[command(flatten)]
        service: ServiceArgs,
    },
    /// Gather a folder into one numbered album and rewrite its tags
    Retag {
        /// Folder to collect audio files from
        #[arg(short, long)]
        source: Option<PathBuf>,
        /// Parent folder of the new album
        #[arg(short, long)]
        destination: Option<PathBuf>,
        /// Album name (also the new folder's name)
        #[arg(short, long)]
        album: Option<String>,
    },
    /// Check whether Spotify credentials are configured
    CheckCredentials {
        #[command(flatten)]
        credentials: CredentialArgs,
    },
    /// Write a starter config file
    InitConfig {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

/// Directories used by the organize pipeline
#[derive(Args, Debug, Clone, Default)]
pub struct DirArgs {
    /// Music directory to scan
    #[arg(short, long)]
    pub music_dir: Option<PathBuf>,
    /// Directory to write playlists into
    #[arg(short, long)]
    pub playlist_dir: Option<PathBuf>,
    /// Directory to copy albums into
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

/// Metadata service selection
#[derive(Args, Debug, Clone, Default)]
pub struct ServiceArgs {
    /// Metadata service: deezer or spotify
    #[arg(long)]
    pub service: Option<String>,
    #[command(flatten)]
    pub credentials: CredentialArgs,
}

/// Spotify credentials from the command line or environment
#[derive(Args, Debug, Clone, Default)]
pub struct CredentialArgs {
    /// Spotify client ID (or set SPOTIFY_CLIENT_ID env var)
    #[arg(long, env = "SPOTIFY_CLIENT_ID", hide_env_values = true)]
    pub client_id: Option<String>,
    /// Spotify client secret (or set SPOTIFY_CLIENT_SECRET env var)
    #[arg(long, env = "SPOTIFY_CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: Option<String>,
}

impl CredentialArgs {
    /// Merge with the config file; arguments and environment win.
    pub fn resolve(&self, config: &Config) -> ServiceCredentials {
        config
            .credentials
            .resolve(self.client_id.as_deref(), self.client_secret.as_deref())
    }
}

/// Pick the metadata service from the argument, the config file or a prompt.
///
/// Unknown names fall back to Deezer with a logged error.
fn resolve_service(given: Option<&str>, config: &Config) -> anyhow::Result<MetadataService> {
    let name = super::prompt::text_or_ask(
        given,
        config.defaults.service.as_deref(),
        "Choose metadata service (deezer/spotify): ",
    )?;
    Ok(MetadataService::parse_or_default(&name))
}

/// Run the specified CLI command.
///
/// With no subcommand, runs `organize` and prompts for everything it needs.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let rt = Runtime::new()?;
    let config = config::load();

    match &cli.command {
        None => cmd_organize(&rt, &config, &DirArgs::default(), &ServiceArgs::default()),
        Some(Commands::Organize { dirs, service }) => cmd_organize(&rt, &config, dirs, service),
        Some(Commands::Playlists {
            music_dir,
            playlist_dir,
        }) => cmd_playlists(&config, music_dir.as_ref(), playlist_dir.as_ref()),
        Some(Commands::Copy {
            music_dir,
            output_dir,
            service,
        }) => cmd_copy(&rt, &config, music_dir.as_ref(), output_dir.as_ref(), service),
        Some(Commands::Retag {
            source,
            destination,
            album,
        }) => cmd_retag(&rt, source.as_ref(), destination.as_ref(), album.as_deref()),
        Some(Commands::CheckCredentials { credentials }) => {
            cmd_check_credentials(&config, credentials)
        }
        Some(Commands::InitConfig { force }) => cmd_init_config(*force),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_organize_with_all_arguments() {
        let cli = Cli::try_parse_from([
            "playlist-minder",
            "organize",
            "--music-dir",
            "/music",
            "--playlist-dir",
            "/playlists",
            "--output-dir",
            "/out",
            "--service",
            "spotify",
            "--client-id",
            "id",
            "--client-secret",
            "secret",
        ])
        .unwrap();

        let Some(Commands::Organize { dirs, service }) = cli.command else {
            panic!("expected organize");
        };
        assert_eq!(dirs.music_dir, Some(PathBuf::from("/music")));
        assert_eq!(dirs.playlist_dir, Some(PathBuf::from("/playlists")));
        assert_eq!(dirs.output_dir, Some(PathBuf::from("/out")));
        assert_eq!(service.service.as_deref(), Some("spotify"));
        assert_eq!(service.credentials.client_id.as_deref(), Some("id"));
    }

    #[test]
    fn test_no_subcommand_is_accepted() {
        let cli = Cli::try_parse_from(["playlist-minder"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_retag() {
        let cli = Cli::try_parse_from([
            "playlist-minder",
            "retag",
            "-s",
            "/rips",
            "-d",
            "/albums",
            "-a",
            "Dookie",
        ])
        .unwrap();

        let Some(Commands::Retag {
            source,
            destination,
            album,
        }) = cli.command
        else {
            panic!("expected retag");
        };
        assert_eq!(source, Some(PathBuf::from("/rips")));
        assert_eq!(destination, Some(PathBuf::from("/albums")));
        assert_eq!(album.as_deref(), Some("Dookie"));
    }

    #[test]
    fn test_service_from_config_without_prompt() {
        let mut config = Config::default();
        config.defaults.service = Some("spotify".to_string());
        assert_eq!(resolve_service(None, &config).unwrap(), MetadataService::Spotify);

        // The argument wins; unknown names fall back to Deezer
        assert_eq!(
            resolve_service(Some("napster"), &config).unwrap(),
            MetadataService::Deezer
        );
    }

    #[test]
    fn test_credential_args_override_config() {
        let mut config = Config::default();
        config.credentials.spotify_client_id = Some("file-id".to_string());
        config.credentials.spotify_client_secret = Some("file-secret".to_string());

        let args = CredentialArgs {
            client_id: Some("cli-id".to_string()),
            client_secret: None,
        };
        assert_eq!(args.resolve(&config).pair(), Some(("cli-id", "file-secret")));
    }
}
