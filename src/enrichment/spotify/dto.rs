//! Spotify Web API Data Transfer Objects
//!
//! These types match what the Spotify token and search endpoints return.
//! DO NOT use these types outside the spotify module - convert to domain types.
//!
//! API Reference: https://developer.spotify.com/documentation/web-api

use serde::{Deserialize, Serialize};

/// Client-credentials token response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    /// Always "Bearer"
    pub token_type: Option<String>,
    /// Lifetime in seconds
    pub expires_in: Option<u64>,
}

/// Search response (only the `albums` page is requested)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResponse {
    pub albums: Option<AlbumPage>,
}

/// Paged album results
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AlbumPage {
    #[serde(default)]
    pub items: Vec<SimplifiedAlbum>,
    pub total: Option<u64>,
}

/// Simplified album object
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SimplifiedAlbum {
    pub id: Option<String>,
    pub name: Option<String>,
    /// Cover images, widest first
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub artists: Vec<Artist>,
    /// YYYY, YYYY-MM or YYYY-MM-DD depending on `release_date_precision`
    pub release_date: Option<String>,
    pub release_date_precision: Option<String>,
    /// Usually empty for simplified albums
    #[serde(default)]
    pub genres: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Image {
    pub url: String,
    pub height: Option<u32>,
    pub width: Option<u32>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Artist {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// Error envelope for non-2xx responses
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: ApiError,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiError {
    pub status: u16,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_token() {
        let json = r#"{"access_token": "BQD-abc", "token_type": "Bearer", "expires_in": 3600}"#;
        let token: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(token.access_token, "BQD-abc");
        assert_eq!(token.expires_in, Some(3600));
    }

    #[test]
    fn test_parse_album_search() {
        let json = r#"{
            "albums": {
                "href": "https://api.spotify.com/v1/search?query=illmatic&type=album",
                "items": [{
                    "album_type": "album",
                    "id": "3kEtdS2pH6hKcMU9Wioob1",
                    "name": "Illmatic",
                    "images": [
                        {"url": "https://i.scdn.co/image/640", "height": 640, "width": 640},
                        {"url": "https://i.scdn.co/image/300", "height": 300, "width": 300}
                    ],
                    "artists": [{"id": "20qISvAhX20dpIbOOzGK3q", "name": "Nas"}],
                    "release_date": "1994-04-19",
                    "release_date_precision": "day"
                }],
                "total": 1
            }
        }"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        let items = response.albums.unwrap().items;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].images.len(), 2);
        assert!(items[0].genres.is_empty());
    }

    #[test]
    fn test_parse_error_envelope() {
        let json = r#"{"error": {"status": 401, "message": "The access token expired"}}"#;
        let response: ErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.error.status, 401);
    }
}
