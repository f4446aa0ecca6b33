//! Playlist caching.
//!
//! Responses are stored as raw text files in a flat directory, one file per
//! URL, named by the URL's digest. Freshness is judged from the file's
//! modification time against a fixed window; entries are never evicted.

pub mod entry;
pub mod key;
pub mod store;

pub use entry::CacheEntry;
pub use key::CacheKey;
pub use store::CacheStore;

use std::path::PathBuf;
use std::time::Duration;

/// Default cache directory, relative to the working directory.
pub const DEFAULT_CACHE_DIR: &str = ".playlist_cache";

/// How long a cached playlist is reused before it is fetched again.
pub const FRESHNESS_WINDOW: Duration = Duration::from_secs(3600);

/// Get the default cache directory.
pub fn default_cache_dir() -> PathBuf {
    PathBuf::from(DEFAULT_CACHE_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cache_dir_is_relative() {
        let path = default_cache_dir();
        assert!(path.is_relative());
        assert!(path.ends_with(".playlist_cache"));
    }

    #[test]
    fn freshness_window_is_one_hour() {
        assert_eq!(FRESHNESS_WINDOW.as_secs(), 3600);
    }
}
