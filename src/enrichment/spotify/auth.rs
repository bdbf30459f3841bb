//! Spotify client-credentials authentication
//!
//! A token is requested once per process. Credentials come from the
//! `SPOTIFY_CLIENT_ID` / `SPOTIFY_CLIENT_SECRET` environment variables or the
//! config file.
//!
//! See: https://developer.spotify.com/documentation/web-api/tutorials/client-credentials-flow

use super::dto;
use crate::enrichment::domain::EnrichmentError;

/// Placeholder values shipped in sample configs; treated as unset.
const PLACEHOLDER_ID: &str = "your_spotify_client_id";
const PLACEHOLDER_SECRET: &str = "your_spotify_client_secret";

const TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Client id/secret pair for the token exchange
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceCredentials {
    client_id: Option<String>,
    client_secret: Option<String>,
}

impl ServiceCredentials {
    /// Build credentials, discarding empty and placeholder values.
    pub fn new(client_id: Option<String>, client_secret: Option<String>) -> Self {
        Self {
            client_id: client_id.filter(|id| is_real(id, PLACEHOLDER_ID)),
            client_secret: client_secret.filter(|s| is_real(s, PLACEHOLDER_SECRET)),
        }
    }

    /// The id/secret pair, if both are set.
    pub fn pair(&self) -> Option<(&str, &str)> {
        Some((self.client_id.as_deref()?, self.client_secret.as_deref()?))
    }

    pub fn is_complete(&self) -> bool {
        self.pair().is_some()
    }

    pub fn has_client_id(&self) -> bool {
        self.client_id.is_some()
    }

    pub fn has_client_secret(&self) -> bool {
        self.client_secret.is_some()
    }
}

fn is_real(value: &str, placeholder: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && value != placeholder
}

/// Exchanges client credentials for a bearer token
pub struct TokenExchange {
    http_client: reqwest::Client,
    token_url: String,
}

impl TokenExchange {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self::with_token_url(http_client, TOKEN_URL)
    }

    pub fn with_token_url(http_client: reqwest::Client, token_url: impl Into<String>) -> Self {
        Self {
            http_client,
            token_url: token_url.into(),
        }
    }

    /// Perform the client-credentials grant and return the access token.
    pub async fn request_token(&self, credentials: &ServiceCredentials) -> Result<String, EnrichmentError> {
        let (client_id, client_secret) = credentials
            .pair()
            .ok_or_else(|| EnrichmentError::Auth("client id or secret not set".to_string()))?;

        let response = self
            .http_client
            .post(&self.token_url)
            .basic_auth(client_id, Some(client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| EnrichmentError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(EnrichmentError::Auth(format!(
                "token request rejected with HTTP {}",
                status.as_u16()
            )));
        }

        let token = response
            .json::<dto::TokenResponse>()
            .await
            .map_err(|e| EnrichmentError::Parse(e.to_string()))?;

        Ok(token.access_token)
    }
}
