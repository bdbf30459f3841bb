//! Configuration system using TOML files.
//!
//! Config is stored in the OS-standard config directory:
//! - Windows: %APPDATA%\playlist-minder\config.toml
//! - macOS: ~/Library/Application Support/playlist-minder/config.toml
//! - Linux: ~/.config/playlist-minder/config.toml
//!
//! The file is optional. Command-line arguments and environment variables
//! take precedence over it; it only fills in values that would otherwise
//! be prompted for.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::enrichment::ServiceCredentials;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API credentials
    pub credentials: Credentials,

    /// Defaults for the organize commands
    pub defaults: DefaultsConfig,
}

impl Config {
    /// Starter config written by `init-config`.
    ///
    /// The credential values are placeholders, which are treated as unset
    /// until the user replaces them.
    pub fn template() -> Self {
        Self {
            credentials: Credentials {
                spotify_client_id: Some("your_spotify_client_id".to_string()),
                spotify_client_secret: Some("your_spotify_client_secret".to_string()),
            },
            defaults: DefaultsConfig {
                service: Some("deezer".to_string()),
                ..Default::default()
            },
        }
    }
}

/// API credentials
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    /// Spotify client ID (client-credentials flow)
    pub spotify_client_id: Option<String>,

    /// Spotify client secret
    pub spotify_client_secret: Option<String>,
}

impl Credentials {
    /// Combine with values from the command line / environment, which win.
    pub fn resolve(&self, client_id: Option<&str>, client_secret: Option<&str>) -> ServiceCredentials {
        ServiceCredentials::new(
            client_id
                .map(String::from)
                .or_else(|| self.spotify_client_id.clone()),
            client_secret
                .map(String::from)
                .or_else(|| self.spotify_client_secret.clone()),
        )
    }
}

/// Default directories and service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Metadata service: "deezer" or "spotify"
    pub service: Option<String>,

    /// Music directory to scan
    pub music_dir: Option<PathBuf>,

    /// Where playlists are written
    pub playlist_dir: Option<PathBuf>,

    /// Where albums are copied
    pub output_dir: Option<PathBuf>,
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("playlist-minder"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from disk
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

/// Load configuration from a specific file, falling back to defaults.
pub fn load_from(path: &Path) -> Config {
    if !path.exists() {
        tracing::debug!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
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
///
/// Creates the config directory if it doesn't exist.
pub fn save(config: &Config) -> Result<PathBuf, ConfigError> {
    let dir = config_dir().ok_or(ConfigError::NoConfigDir)?;
    save_to(config, &dir.join("config.toml"))
}

/// Save configuration to a specific file
pub fn save_to(config: &Config, path: &Path) -> Result<PathBuf, ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| ConfigError::CreateDir(dir.to_path_buf(), e))?;
    }

    // Serialize to pretty TOML
    let contents = toml::to_string_pretty(config).map_err(ConfigError::Serialize)?;

    // Write atomically (write to temp, then rename)
    let temp_path = path.with_extension("toml.tmp");
    std::fs::write(&temp_path, &contents).map_err(|e| ConfigError::Write(temp_path.clone(), e))?;
    std::fs::rename(&temp_path, path)
        .map_err(|e| ConfigError::Rename(temp_path, path.to_path_buf(), e))?;

    tracing::info!("Saved config to {:?}", path);
    Ok(path.to_path_buf())
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

impl From<ConfigError> for crate::error::Error {
    fn from(e: ConfigError) -> Self {
        crate::error::Error::config(e.to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================
