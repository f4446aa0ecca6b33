//! Fetcher settings.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cache::{default_cache_dir, FRESHNESS_WINDOW};
use crate::config::schema::Manifest;

/// Browser-like User-Agent sent with every request.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Per-request network timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Everything a [`crate::fetch::Fetcher`] needs to know about its
/// environment. Built once by the caller and handed to the fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetcherConfig {
    /// Directory holding cached responses.
    pub cache_dir: PathBuf,
    /// User-Agent header value.
    pub user_agent: String,
    /// Timeout applied to each request.
    pub request_timeout: Duration,
    /// Cached responses younger than this are reused.
    pub freshness_window: Duration,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            cache_dir: default_cache_dir(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout: REQUEST_TIMEOUT,
            freshness_window: FRESHNESS_WINDOW,
        }
    }
}

impl FetcherConfig {
    /// Defaults with a custom cache directory.
    pub fn with_cache_dir(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
            ..Self::default()
        }
    }

    /// Resolve settings from the command line and an optional manifest.
    ///
    /// The command-line cache directory wins over the manifest's, which wins
    /// over the default.
    pub fn resolve(cli_cache_dir: Option<&Path>, manifest: Option<&Manifest>) -> Self {
        let mut config = Self::default();

        if let Some(manifest) = manifest {
            if let Some(dir) = &manifest.cache_dir {
                config.cache_dir = dir.clone();
            }
            if let Some(agent) = &manifest.user_agent {
                config.user_agent = agent.clone();
            }
        }

        if let Some(dir) = cli_cache_dir {
            config.cache_dir = dir.to_path_buf();
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_constants() {
        let config = FetcherConfig::default();
        assert_eq!(config.cache_dir, PathBuf::from(".playlist_cache"));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.freshness_window, Duration::from_secs(3600));
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn resolve_without_inputs_is_default() {
        assert_eq!(FetcherConfig::resolve(None, None), FetcherConfig::default());
    }

    #[test]
    fn manifest_overrides_defaults() {
        let manifest = Manifest {
            cache_dir: Some(PathBuf::from("/tmp/pl-cache")),
            user_agent: Some("custom/1.0".to_string()),
            playlists: Vec::new(),
        };

        let config = FetcherConfig::resolve(None, Some(&manifest));

        assert_eq!(config.cache_dir, PathBuf::from("/tmp/pl-cache"));
        assert_eq!(config.user_agent, "custom/1.0");
    }

    #[test]
    fn cli_cache_dir_overrides_manifest() {
        let manifest = Manifest {
            cache_dir: Some(PathBuf::from("/tmp/from-manifest")),
            ..Default::default()
        };

        let config =
            FetcherConfig::resolve(Some(Path::new("/tmp/from-cli")), Some(&manifest));

        assert_eq!(config.cache_dir, PathBuf::from("/tmp/from-cli"));
    }

    #[test]
    fn with_cache_dir_keeps_other_defaults() {
        let config = FetcherConfig::with_cache_dir("/tmp/c");
        assert_eq!(config.cache_dir, PathBuf::from("/tmp/c"));
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    }
}
