//! Deezer API integration
//!
//! Album search via the public Deezer API.

pub mod dto;
mod adapter;
mod client;

pub use client::DeezerClient;
