//! Metadata client - best-effort album enrichment
//!
//! Wraps exactly one catalog service chosen at construction:
//! 1. Deezer: ready immediately
//! 2. Spotify: exchanges client credentials for a token once, up front
//!
//! Lookups never fail from the caller's point of view: every error is
//! logged and turned into an all-absent [`AlbumMetadata`].

use tracing::{debug, error, info, warn};

use crate::enrichment::{
    deezer::DeezerClient,
    domain::{EnrichmentError, MetadataService},
    spotify::{ServiceCredentials, SpotifyClient, TokenExchange},
    traits::AlbumLookup,
};
use crate::model::AlbumMetadata;

/// Best-effort album metadata lookups against one service
pub struct MetadataClient {
    service: MetadataService,
    lookup: Option<Box<dyn AlbumLookup>>,
}

impl MetadataClient {
    /// Connect to the chosen service.
    ///
    /// For Spotify this performs the token exchange. Missing credentials or
    /// a failed exchange disable enrichment instead of failing.
    pub async fn new(service: MetadataService, credentials: &ServiceCredentials) -> Self {
        let http_client = super::http_client();
        match service {
            MetadataService::Deezer => Self::from_lookup(service, DeezerClient::new(http_client)),
            MetadataService::Spotify => {
                if !credentials.is_complete() {
                    warn!(
                        "Spotify client ID or secret not set. Please set SPOTIFY_CLIENT_ID and SPOTIFY_CLIENT_SECRET."
                    );
                    return Self::disabled(service);
                }
                let exchange = TokenExchange::new(http_client.clone());
                Self::connect_spotify(http_client, &exchange, credentials).await
            }
        }
    }

    async fn connect_spotify(
        http_client: reqwest::Client,
        exchange: &TokenExchange,
        credentials: &ServiceCredentials,
    ) -> Self {
        match exchange.request_token(credentials).await {
            Ok(token) => {
                info!("Obtained Spotify access token");
                Self::from_lookup(MetadataService::Spotify, SpotifyClient::new(http_client, token))
            }
            Err(e) => {
                error!("Failed to obtain Spotify token, metadata enrichment disabled: {}", e);
                Self::disabled(MetadataService::Spotify)
            }
        }
    }

    /// Use an arbitrary lookup implementation.
    pub fn from_lookup(service: MetadataService, lookup: impl AlbumLookup + 'static) -> Self {
        Self {
            service,
            lookup: Some(Box::new(lookup)),
        }
    }

    /// A client whose lookups always return absent metadata.
    pub fn disabled(service: MetadataService) -> Self {
        Self {
            service,
            lookup: None,
        }
    }

    pub fn service(&self) -> MetadataService {
        self.service
    }

    pub fn is_enabled(&self) -> bool {
        self.lookup.is_some()
    }

    /// Fetch album metadata (art URL, artist, release year, genre).
    pub async fn fetch_album_metadata(&self, album: &str) -> AlbumMetadata {
        let Some(lookup) = &self.lookup else {
            debug!("Enrichment disabled, skipping lookup for {}", album);
            return AlbumMetadata::default();
        };

        match lookup.search_album(album).await {
            Ok(metadata) => {
                if metadata.is_empty() {
                    info!("{} match for {} has no usable metadata", self.service, album);
                } else {
                    debug!("{} metadata for {}: {:?}", self.service, album, metadata);
                }
                metadata
            }
            Err(EnrichmentError::NoMatches) => {
                info!("No {} results for album {}", self.service, album);
                AlbumMetadata::default()
            }
            Err(e) => {
                error!("Error fetching metadata for {}: {}", album, e);
                AlbumMetadata::default()
            }
        }
    }
}
