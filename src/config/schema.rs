//! Playlist manifest schema.
//!
//! The manifest is a YAML file listing the playlists to fetch:
//!
//! ```yaml
//! cache_dir: .playlist_cache
//! playlists:
//!   - url: https://example.com/live.m3u
//!     output: live.m3u
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root manifest structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Manifest {
    /// Cache directory override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_dir: Option<PathBuf>,

    /// User-Agent override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,

    /// Playlists to fetch, in order.
    pub playlists: Vec<PlaylistEntry>,
}

/// One download request: where to fetch from and where to write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlaylistEntry {
    /// Source URL.
    pub url: String,

    /// Destination file.
    pub output: PathBuf,
}

impl PlaylistEntry {
    pub fn new(url: impl Into<String>, output: impl Into<PathBuf>) -> Self {
        Self {
            url: url.into(),
            output: output.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_manifest() {
        let yaml = r#"
cache_dir: /var/cache/playlists
user_agent: test-agent
playlists:
  - url: https://example.com/a.m3u
    output: a.m3u
  - url: https://example.com/b.m3u
    output: out/b.m3u
"#;
        let manifest: Manifest = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(
            manifest.cache_dir,
            Some(PathBuf::from("/var/cache/playlists"))
        );
        assert_eq!(manifest.user_agent.as_deref(), Some("test-agent"));
        assert_eq!(manifest.playlists.len(), 2);
        assert_eq!(
            manifest.playlists[1],
            PlaylistEntry::new("https://example.com/b.m3u", "out/b.m3u")
        );
    }

    #[test]
    fn missing_sections_use_defaults() {
        let manifest: Manifest = serde_yaml::from_str("{}").unwrap();
        assert_eq!(manifest, Manifest::default());
        assert!(manifest.playlists.is_empty());
    }

    #[test]
    fn entry_requires_output() {
        let yaml = "playlists:\n  - url: https://example.com/a.m3u\n";
        let result: Result<Manifest, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let yaml = "playlist:\n  - url: https://example.com/a.m3u\n    output: a.m3u\n";
        let result: Result<Manifest, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn none_overrides_are_omitted_when_serialized() {
        let manifest = Manifest {
            playlists: vec![PlaylistEntry::new("https://example.com/a.m3u", "a.m3u")],
            ..Default::default()
        };
        let yaml = serde_yaml::to_string(&manifest).unwrap();
        assert!(!yaml.contains("cache_dir"));
        assert!(!yaml.contains("user_agent"));
        assert!(yaml.contains("a.m3u"));
    }
}
