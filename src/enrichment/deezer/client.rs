//! Deezer HTTP client
//!
//! The search endpoint is public: no API key or token required.
//!
//! API: https://developers.deezer.com/api

use super::{adapter, dto};
use crate::enrichment::domain::EnrichmentError;
use crate::model::AlbumMetadata;

/// Deezer search client
pub struct DeezerClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl DeezerClient {
    /// Create a new client
    pub fn new(http_client: reqwest::Client) -> Self {
        Self::with_base_url(http_client, "https://api.deezer.com")
    }

    /// Create a client with a custom base URL
    pub fn with_base_url(http_client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    /// Search for an album by name and return metadata for the first hit
    pub async fn search_album(&self, album: &str) -> Result<AlbumMetadata, EnrichmentError> {
        let response = self.send_search_request(album).await?;
        adapter::to_metadata(response)
    }

    async fn send_search_request(&self, album: &str) -> Result<dto::SearchResponse, EnrichmentError> {
        let url = format!("{}/search", self.base_url);

        let response = self
            .http_client
            .get(&url)
            .query(&[("q", album), ("type", "album")])
            .send()
            .await
            .map_err(|e| EnrichmentError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(EnrichmentError::from_status(status));
        }

        response
            .json::<dto::SearchResponse>()
            .await
            .map_err(|e| EnrichmentError::Parse(e.to_string()))
    }
}
