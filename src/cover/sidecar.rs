//! Plain-text metadata file written next to each copied album.
//!
//! Format (one label per line, `Unknown` for missing values):
//! ```text
//! Album: Dookie
//! Artist: Green Day
//! Release Year: 1994
//! Genre: Rock
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::error::{Error, Result};
use crate::model::AlbumMetadata;

/// Value written for fields the lookup did not return
pub const PLACEHOLDER: &str = "Unknown";

/// Path of the sidecar file for an album
pub fn metadata_path(dest: &Path, album: &str) -> PathBuf {
    dest.join(format!("{}_metadata.txt", album))
}

/// Render the four labeled lines.
pub fn render(album: &str, metadata: &AlbumMetadata) -> String {
    let field = |value: &Option<String>| value.clone().unwrap_or_else(|| PLACEHOLDER.to_string());
    format!(
        "Album: {}\nArtist: {}\nRelease Year: {}\nGenre: {}\n",
        album,
        field(&metadata.artist),
        field(&metadata.release_year),
        field(&metadata.genre),
    )
}

/// Write the sidecar file, returning an error instead of logging.
pub fn write_metadata(album: &str, dest: &Path, metadata: &AlbumMetadata) -> Result<PathBuf> {
    let path = metadata_path(dest, album);
    fs::write(&path, render(album, metadata)).map_err(|e| Error::write(&path, e.to_string()))?;
    Ok(path)
}

/// Save album metadata to a text file. Failures are logged, not raised.
pub fn save_metadata(album: &str, dest: &Path, metadata: &AlbumMetadata) -> Option<PathBuf> {
    match write_metadata(album, dest, metadata) {
        Ok(path) => {
            info!("Saved metadata for: {} at {:?}", album, path);
            Some(path)
        }
        Err(e) => {
            error!("Error saving metadata for {}: {}", album, e);
            None
        }
    }
}
