//! playfetch - Fetch remote playlists with a local cache and retries.
//!
//! Each playlist is downloaded over HTTP, cached under a key derived from its
//! URL, and written to its destination behind a timestamp header. Content
//! cached within the freshness window is reused without touching the network.
//!
//! # Modules
//!
//! - [`cache`] - URL-keyed content cache with mtime freshness
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Manifest loading and fetcher settings
//! - [`error`] - Error types and result aliases
//! - [`fetch`] - HTTP transport, retry policy, and the fetcher
//! - [`metadata`] - Directory reports (JSON and HTML)
//! - [`output`] - Timestamp header and destination writes
//! - [`runner`] - Sequential manifest processing
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use playfetch::cache::CacheKey;
//!
//! let key = CacheKey::for_url("https://example.com/live.m3u");
//! assert_eq!(key.as_str().len(), 64);
//! ```

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod metadata;
pub mod output;
pub mod runner;
pub mod ui;

pub use error::{PlayfetchError, Result};
