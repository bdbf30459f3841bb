//! Album art download and sidecar metadata.
//!
//! Art is fetched from the URL returned by the catalog lookup, decoded, and
//! re-encoded as JPEG next to the copied songs. Nothing here is fatal:
//! missing or broken art is logged and the album carries on without it.

pub mod sidecar;

use std::path::{Path, PathBuf};

use image::ImageFormat;
use tracing::{debug, error, info, warn};

use crate::enrichment::EnrichmentError;
use crate::error::{Error, Result};
use crate::model::AlbumMetadata;

pub use sidecar::save_metadata;

/// Path of the cover image for an album
pub fn art_path(dest: &Path, album: &str) -> PathBuf {
    dest.join(format!("{}.jpg", album))
}

/// Downloads cover images
pub struct ArtDownloader {
    http_client: reqwest::Client,
}

impl ArtDownloader {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }

    /// Download and save album art for an album.
    ///
    /// Returns the written path, or `None` when there is no art URL or the
    /// download/decode failed.
    pub async fn download_album_art(
        &self,
        album: &str,
        dest: &Path,
        metadata: &AlbumMetadata,
    ) -> Option<PathBuf> {
        let Some(url) = metadata.art_url.as_deref() else {
            warn!("No album art found for: {}", album);
            return None;
        };

        let bytes = match self.fetch_image(url).await {
            Ok(bytes) => bytes,
            Err(e) => {
                error!("Error downloading album art for {}: {}", album, e);
                return None;
            }
        };

        let path = art_path(dest, album);
        match save_album_art(&bytes, &path) {
            Ok(()) => {
                info!("Downloaded album art for: {} at {:?}", album, path);
                Some(path)
            }
            Err(e) => {
                error!("Error saving album art for {}: {}", album, e);
                None
            }
        }
    }

    /// Download an image from a URL
    async fn fetch_image(&self, url: &str) -> std::result::Result<Vec<u8>, EnrichmentError> {
        debug!("Fetching cover art from {}", url);
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| EnrichmentError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(EnrichmentError::from_status(status));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| EnrichmentError::Network(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

/// Decode image bytes (any supported format) and write them as JPEG.
pub fn save_album_art(bytes: &[u8], path: &Path) -> Result<()> {
    let image = image::load_from_memory(bytes)
        .map_err(|e| Error::Enrichment(EnrichmentError::Decode(e.to_string())))?;

    // JPEG has no alpha channel
    image
        .into_rgb8()
        .save_with_format(path, ImageFormat::Jpeg)
        .map_err(|e| Error::write(path, e.to_string()))
}
