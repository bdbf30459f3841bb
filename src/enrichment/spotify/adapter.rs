//! Adapter layer: Convert Spotify DTOs to domain models

use super::dto;
use crate::enrichment::domain::{EnrichmentError, non_empty};
use crate::model::{AlbumMetadata, release_year};

/// Convert a search response into metadata for its first album.
pub fn to_metadata(response: dto::SearchResponse) -> Result<AlbumMetadata, EnrichmentError> {
    let album = response
        .albums
        .and_then(|page| page.items.into_iter().next())
        .ok_or(EnrichmentError::NoMatches)?;

    Ok(AlbumMetadata {
        art_url: non_empty(album.images.into_iter().next().map(|i| i.url)),
        artist: non_empty(album.artists.into_iter().next().and_then(|a| a.name)),
        release_year: album.release_date.as_deref().and_then(release_year),
        genre: non_empty(album.genres.into_iter().next()),
    })
}
