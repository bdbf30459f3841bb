//! Application-wide error types.
//!
//! Library modules use specific error types via `thiserror`, while the
//! CLI/main layer uses `anyhow` for convenient error propagation.
//!
//! # Failure policy
//!
//! - [`Error::NotFound`]: a required input directory is missing. Fatal,
//!   raised before any work starts.
//! - [`EnrichmentError`]: network, metadata or image fetch failures. Never
//!   fatal; callers log them and continue with absent data.
//! - [`Error::Write`]: playlist, sidecar or tag write failure for one item.
//!   The main pipeline logs it and moves on to the next item.
//! - [`Error::FatalCopy`]: any failure inside the retag pipeline. Aborts the
//!   whole run.

use std::path::PathBuf;

pub use crate::enrichment::EnrichmentError;

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Required directory or file is missing
    #[error("Not found: {0}")]
    NotFound(PathBuf),

    /// Failed to write an output file (playlist, sidecar, tags)
    #[error("Failed to write {path}: {message}")]
    Write { path: PathBuf, message: String },

    /// Copy or tag failure in the retag pipeline
    #[error("Retag aborted: {0}")]
    FatalCopy(String),

    /// Enrichment/lookup error
    #[error("Enrichment error: {0}")]
    Enrichment(#[from] EnrichmentError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create a not found error.
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound(path.into())
    }

    /// Create a write error.
    pub fn write(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Write {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a fatal retag error.
    pub fn fatal_copy(message: impl Into<String>) -> Self {
        Self::FatalCopy(message.into())
    }

    /// Create a config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Add context to an error.
    pub fn context(self, ctx: impl Into<String>) -> Self {
        Self::WithContext {
            context: ctx.into(),
            source: Box::new(self),
        }
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn with_context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Io(e).context(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::not_found("/path/to/music");
        assert!(err.to_string().contains("/path/to/music"));
    }

    #[test]
    fn test_error_with_context() {
        let err = Error::fatal_copy("disk full").context("while copying track 3");
        let msg = err.to_string();
        assert!(msg.contains("while copying track 3"));
        assert!(msg.contains("disk full"));
    }

    #[test]
    fn test_write_error() {
        let err = Error::write("/playlists/Album.m3u", "permission denied");
        let msg = err.to_string();
        assert!(msg.contains("Album.m3u"));
        assert!(msg.contains("permission denied"));
    }

    #[test]
    fn test_result_ext() {
        let result: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::other("boom"));
        let with_ctx = result.with_context("creating album folder");
        assert!(
            with_ctx
                .unwrap_err()
                .to_string()
                .contains("creating album folder")
        );
    }
}
