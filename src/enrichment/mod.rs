//! Album enrichment - fetches metadata from external catalog services.
//!
//! # Architecture
//!
//! - **Domain** (`domain.rs`) - service selection and error taxonomy
//! - **API DTOs** (`deezer/dto.rs`, `spotify/dto.rs`) - exact response shapes
//! - **Adapters** - convert DTOs to [`AlbumMetadata`](crate::model::AlbumMetadata)
//! - **Clients** - HTTP clients for each service
//! - **Service** - [`MetadataClient`], the best-effort facade used by the pipeline
//!
//! # Usage
//!
//! ```ignore
//! let client = MetadataClient::new(MetadataService::Deezer, &ServiceCredentials::default()).await;
//! let meta = client.fetch_album_metadata("Dookie").await;
//! println!("Artist: {:?}", meta.artist);
//! ```

pub mod deezer;
pub mod domain;
pub mod service;
pub mod spotify;
pub mod traits;

pub use domain::{EnrichmentError, MetadataService};
pub use service::MetadataClient;
pub use spotify::ServiceCredentials;
pub use traits::AlbumLookup;

/// User agent sent with every request
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Shared HTTP client for catalog and image requests.
pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .gzip(true)
        .user_agent(USER_AGENT)
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!("Failed to configure HTTP client, using defaults: {}", e);
            reqwest::Client::new()
        })
}
