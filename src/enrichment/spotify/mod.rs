//! Spotify Web API integration
//!
//! Token-based: a client-credentials token is fetched once at startup and
//! reused for every album search.

pub mod dto;
mod adapter;
mod auth;
mod client;

pub use auth::{ServiceCredentials, TokenExchange};
pub use client::SpotifyClient;
