//! Album copying.
//!
//! Copies each scanned album into `<output>/<album>/`, then enriches it with
//! cover art and a sidecar metadata file.
//!
//! # Failure isolation
//! - A song that fails to copy is logged and skipped
//! - Enrichment failures never stop the copy
//! - Albums are processed one after another and never affect each other

pub mod retag;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::cover::{self, ArtDownloader};
use crate::enrichment::MetadataClient;
use crate::error::{Error, Result, ResultExt};
use crate::model::{Album, AlbumCollection};

/// Result of copying one album
#[derive(Debug, Clone, Default)]
pub struct AlbumCopyResult {
    pub album: String,
    /// Destination folder
    pub dir: PathBuf,
    /// Number of songs copied
    pub copied: usize,
    /// Songs that could not be copied
    pub failed: Vec<PathBuf>,
    /// Cover image, if one was downloaded
    pub art: Option<PathBuf>,
    /// Sidecar metadata file, if it was written
    pub metadata_file: Option<PathBuf>,
}

/// Summary of a copy run
#[derive(Debug, Clone, Default)]
pub struct CopyReport {
    pub albums: Vec<AlbumCopyResult>,
    /// Albums whose destination folder could not be created
    pub skipped: Vec<String>,
}

impl CopyReport {
    pub fn songs_copied(&self) -> usize {
        self.albums.iter().map(|a| a.copied).sum()
    }

    pub fn songs_failed(&self) -> usize {
        self.albums.iter().map(|a| a.failed.len()).sum()
    }
}

/// Copy one file, creating nothing but the file itself.
pub fn copy_file(source: &Path, destination: &Path) -> Result<u64> {
    fs::copy(source, destination).with_context(format!(
        "Failed to copy {:?} to {:?}",
        source, destination
    ))
}

/// Copy a file into `dir`, keeping its file name.
pub fn copy_into(source: &Path, dir: &Path) -> Result<PathBuf> {
    let file_name = source
        .file_name()
        .ok_or_else(|| Error::write(source, "path has no file name"))?;
    let destination = dir.join(file_name);
    copy_file(source, &destination)?;
    Ok(destination)
}

/// Copy albums to the output directory, adding album art and metadata.
pub async fn copy_albums(
    albums: &AlbumCollection,
    output_dir: &Path,
    metadata_client: &MetadataClient,
    art: &ArtDownloader,
) -> CopyReport {
    let mut report = CopyReport::default();

    for album in albums {
        match copy_album(album, output_dir, metadata_client, art).await {
            Ok(result) => report.albums.push(result),
            Err(e) => {
                error!("Error copying album {}: {}", album.name, e);
                report.skipped.push(album.name.clone());
            }
        }
    }

    report
}

/// Copy a single album, then fetch and write its art and metadata.
///
/// Only failing to create the album folder is an error; everything after
/// that is logged and recorded in the result.
pub async fn copy_album(
    album: &Album,
    output_dir: &Path,
    metadata_client: &MetadataClient,
    art: &ArtDownloader,
) -> Result<AlbumCopyResult> {
    let album_dir = output_dir.join(&album.name);
    fs::create_dir_all(&album_dir)
        .with_context(format!("Failed to create album folder {:?}", album_dir))?;

    let mut result = AlbumCopyResult {
        album: album.name.clone(),
        dir: album_dir.clone(),
        ..Default::default()
    };

    for song in &album.songs {
        match copy_into(song, &album_dir) {
            Ok(_) => result.copied += 1,
            Err(e) => {
                error!("Error copying song {:?} for album {}: {}", song, album.name, e);
                result.failed.push(song.clone());
            }
        }
    }

    let metadata = metadata_client.fetch_album_metadata(&album.name).await;
    result.art = art
        .download_album_art(&album.name, &album_dir, &metadata)
        .await;
    result.metadata_file = cover::save_metadata(&album.name, &album_dir, &metadata);

    info!("Copied album: {} to {:?}", album.name, album_dir);
    Ok(result)
}

/// Sanitizes a typed album name for use as a folder name
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            _ => c,
        })
        .collect()
}
