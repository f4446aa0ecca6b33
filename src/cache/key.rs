//! Cache key derivation.

use sha2::{Digest, Sha256};
use std::fmt;

/// Deterministic digest of a source URL, used as the cache filename.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Derive the key for a URL (lowercase hex SHA-256 of its bytes).
    pub fn for_url(url: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(url.as_bytes());
        Self(hex::encode(hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_deterministic() {
        let a = CacheKey::for_url("https://example.com/live.m3u");
        let b = CacheKey::for_url("https://example.com/live.m3u");
        assert_eq!(a, b);
    }

    #[test]
    fn different_urls_have_different_keys() {
        let a = CacheKey::for_url("https://example.com/live.m3u");
        let b = CacheKey::for_url("https://example.com/live.m3u?v=2");
        let c = CacheKey::for_url("https://example.org/live.m3u");
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(b, c);
    }

    #[test]
    fn key_is_hex_sha256() {
        let key = CacheKey::for_url("");
        assert_eq!(
            key.as_str(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn display_matches_as_str() {
        let key = CacheKey::for_url("https://example.com/a.m3u");
        assert_eq!(key.to_string(), key.as_str());
        assert_eq!(key.as_str().len(), 64);
    }
}
