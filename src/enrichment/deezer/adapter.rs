//! Adapter layer: Convert Deezer DTOs to domain models

use super::dto;
use crate::enrichment::domain::{EnrichmentError, non_empty};
use crate::model::{AlbumMetadata, release_year};

/// Convert a search response into metadata for its first result.
pub fn to_metadata(response: dto::SearchResponse) -> Result<AlbumMetadata, EnrichmentError> {
    if let Some(error) = response.error {
        return Err(EnrichmentError::ApiError(
            error.message.unwrap_or_else(|| "unknown Deezer error".to_string()),
        ));
    }

    let album = response
        .data
        .into_iter()
        .next()
        .ok_or(EnrichmentError::NoMatches)?;

    Ok(album_to_metadata(album))
}

fn album_to_metadata(album: dto::AlbumResult) -> AlbumMetadata {
    let genre = album
        .genres
        .and_then(|g| g.data.into_iter().next())
        .and_then(|g| g.name);

    AlbumMetadata {
        art_url: non_empty(album.cover_big),
        artist: non_empty(album.artist.and_then(|a| a.name)),
        release_year: album.release_date.as_deref().and_then(release_year),
        genre: non_empty(genre),
    }
}
