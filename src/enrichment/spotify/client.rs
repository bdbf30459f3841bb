//! Spotify HTTP client
//!
//! Every request carries the bearer token obtained by [`super::TokenExchange`].
//!
//! API: https://developer.spotify.com/documentation/web-api/reference/search

use super::{adapter, dto};
use crate::enrichment::domain::EnrichmentError;
use crate::model::AlbumMetadata;

/// Spotify search client
pub struct SpotifyClient {
    http_client: reqwest::Client,
    base_url: String,
    token: String,
}

impl SpotifyClient {
    /// Create a new client using an already issued access token
    pub fn new(http_client: reqwest::Client, token: impl Into<String>) -> Self {
        Self::with_base_url(http_client, token, "https://api.spotify.com/v1")
    }

    pub fn with_base_url(
        http_client: reqwest::Client,
        token: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
            token: token.into(),
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
            .bearer_auth(&self.token)
            .query(&[("q", album), ("type", "album")])
            .send()
            .await
            .map_err(|e| EnrichmentError::Network(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(EnrichmentError::Auth("access token rejected".to_string()));
        }

        if !status.is_success() {
            // Try to parse error response
            if let Ok(error) = response.json::<dto::ErrorResponse>().await {
                return Err(EnrichmentError::ApiError(error.error.message));
            }
            return Err(EnrichmentError::from_status(status));
        }

        response
            .json::<dto::SearchResponse>()
            .await
            .map_err(|e| EnrichmentError::Parse(e.to_string()))
    }
}
