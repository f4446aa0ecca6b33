//! Error types for playfetch operations.
//!
//! This module defines [`PlayfetchError`], the primary error type used by the
//! library, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Per-attempt network failures never surface here; the fetcher absorbs
//!   them into its retry loop (see [`crate::fetch::FetchError`])
//! - Use `PlayfetchError` for failures a caller needs to tell apart
//! - Use `anyhow::Error` (via `PlayfetchError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for playfetch operations.
#[derive(Debug, Error)]
pub enum PlayfetchError {
    /// Playlist manifest not found at expected location.
    #[error("Manifest not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the playlist manifest.
    #[error("Failed to parse manifest at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Manifest parsed but holds invalid values.
    #[error("Invalid manifest: {message}")]
    ConfigValidationError { message: String },

    /// Writing the destination playlist failed.
    #[error("Failed to write playlist {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The cache directory could not be created.
    #[error("Failed to create cache directory {path}: {source}")]
    CacheDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP client could not be built.
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for playfetch operations.
pub type Result<T> = std::result::Result<T, PlayfetchError>;
