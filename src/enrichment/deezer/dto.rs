//! Deezer API Data Transfer Objects
//!
//! These types match what the Deezer search endpoint returns.
//! DO NOT use these types outside the deezer module - convert to domain types.
//!
//! API Reference: https://developers.deezer.com/api/search
//!
//! Deezer reports errors with HTTP 200 and an `error` object in the body,
//! so both fields are optional here.

use serde::{Deserialize, Serialize};

/// Search response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResponse {
    /// Matching results, best match first
    #[serde(default)]
    pub data: Vec<AlbumResult>,
    /// Total number of matches
    pub total: Option<u64>,
    /// Present instead of `data` when the request failed
    pub error: Option<ApiError>,
}

/// A single search hit
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AlbumResult {
    pub id: Option<u64>,
    pub title: Option<String>,
    /// 500x500 cover URL
    pub cover_big: Option<String>,
    /// 1000x1000 cover URL
    pub cover_xl: Option<String>,
    /// Release date (YYYY-MM-DD)
    pub release_date: Option<String>,
    pub artist: Option<Artist>,
    pub genres: Option<Genres>,
}

/// Artist summary
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Artist {
    pub id: Option<u64>,
    pub name: Option<String>,
}

/// Genre list wrapper (`{"data": [...]}`)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Genres {
    #[serde(default)]
    pub data: Vec<Genre>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Genre {
    pub id: Option<i64>,
    pub name: Option<String>,
}

/// Error object
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiError {
    #[serde(rename = "type")]
    pub error_type: Option<String>,
    pub message: Option<String>,
    pub code: Option<u32>,
}
