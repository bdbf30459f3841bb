//! Trait definitions for catalog lookups.
//!
//! These traits enable dependency injection and mocking for tests.
//! Production code uses the Deezer and Spotify clients, while tests
//! substitute mock implementations.

use async_trait::async_trait;

use super::domain::EnrichmentError;
use crate::model::AlbumMetadata;

/// One search request per album, first result wins.
#[async_trait]
pub trait AlbumLookup: Send + Sync {
    /// Look up an album by name.
    async fn search_album(&self, album: &str) -> Result<AlbumMetadata, EnrichmentError>;
}

#[async_trait]
impl AlbumLookup for super::deezer::DeezerClient {
    async fn search_album(&self, album: &str) -> Result<AlbumMetadata, EnrichmentError> {
        self.search_album(album).await
    }
}

#[async_trait]
impl AlbumLookup for super::spotify::SpotifyClient {
    async fn search_album(&self, album: &str) -> Result<AlbumMetadata, EnrichmentError> {
        self.search_album(album).await
    }
}
