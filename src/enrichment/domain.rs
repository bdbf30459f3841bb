//! Internal domain types for album enrichment.
//!
//! These types don't change when external APIs change. Service responses
//! are converted into [`AlbumMetadata`](crate::model::AlbumMetadata) by each
//! service's adapter.

use std::fmt;

use tracing::error;

/// Catalog service used for metadata lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MetadataService {
    /// Open search API, no credentials needed
    #[default]
    Deezer,
    /// Token-based API using the client-credentials flow
    Spotify,
}

impl MetadataService {
    /// Parse a service name (case-insensitive).
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "deezer" => Some(Self::Deezer),
            "spotify" => Some(Self::Spotify),
            _ => None,
        }
    }

    /// Parse a service name, falling back to Deezer with a logged error.
    pub fn parse_or_default(name: &str) -> Self {
        Self::parse(name).unwrap_or_else(|| {
            error!("Invalid service choice {:?}. Defaulting to Deezer.", name);
            Self::default()
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deezer => "deezer",
            Self::Spotify => "spotify",
        }
    }
}

impl fmt::Display for MetadataService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur during enrichment.
///
/// None of these are fatal: the caller logs them and carries on without
/// the missing data.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EnrichmentError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("No matches found")]
    NoMatches,

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Failed to decode image: {0}")]
    Decode(String),
}

impl EnrichmentError {
    /// Build an HTTP status error from a non-success response status.
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        Self::Http {
            status: status.as_u16(),
            message: status.canonical_reason().unwrap_or("Unknown").to_string(),
        }
    }
}

/// Treat empty strings from an API as missing.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_service() {
        assert_eq!(MetadataService::parse("deezer"), Some(MetadataService::Deezer));
        assert_eq!(MetadataService::parse(" Spotify "), Some(MetadataService::Spotify));
        assert_eq!(MetadataService::parse("tidal"), None);
    }

    #[test]
    fn test_invalid_service_falls_back_to_deezer() {
        assert_eq!(MetadataService::parse_or_default("napster"), MetadataService::Deezer);
        assert_eq!(MetadataService::parse_or_default("SPOTIFY"), MetadataService::Spotify);
    }

    #[test]
    fn test_status_error() {
        let err = EnrichmentError::from_status(reqwest::StatusCode::NOT_FOUND);
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("Not Found"));
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(Some("Rock".to_string())), Some("Rock".to_string()));
        assert_eq!(non_empty(Some("  ".to_string())), None);
        assert_eq!(non_empty(None), None);
    }
}
