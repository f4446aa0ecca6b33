//! Configuration for playfetch.
//!
//! - Manifest schema in [`schema`]
//! - Manifest loading and validation in [`loader`]
//! - Resolved fetcher settings in [`settings`]
//!
//! # Example
//!
//! ```
//! use playfetch::config::{parse_manifest, FetcherConfig};
//! use std::path::Path;
//!
//! let yaml = "cache_dir: /tmp/pl\nplaylists:\n  - url: https://example.com/a.m3u\n    output: a.m3u\n";
//! let manifest = parse_manifest(yaml, Path::new("playlists.yml")).unwrap();
//! let config = FetcherConfig::resolve(None, Some(&manifest));
//! assert_eq!(config.cache_dir, Path::new("/tmp/pl"));
//! ```

pub mod loader;
pub mod schema;
pub mod settings;

pub use loader::{load_manifest, parse_manifest, validate, DEFAULT_MANIFEST};
pub use schema::{Manifest, PlaylistEntry};
pub use settings::{FetcherConfig, DEFAULT_USER_AGENT, REQUEST_TIMEOUT};
