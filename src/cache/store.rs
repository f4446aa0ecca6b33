//! Cache storage implementation.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::entry::CacheEntry;
use super::key::CacheKey;
use crate::error::PlayfetchError;
use crate::output::write_atomic;

/// Flat directory of cached playlists keyed by URL digest.
#[derive(Debug, Clone)]
pub struct CacheStore {
    /// Root directory for cache.
    root: PathBuf,
}

impl CacheStore {
    /// Create a new cache store.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the cache root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Ensure the cache directory exists.
    pub fn ensure_dir(&self) -> crate::error::Result<()> {
        fs::create_dir_all(&self.root).map_err(|source| PlayfetchError::CacheDir {
            path: self.root.clone(),
            source,
        })
    }

    /// Get the path for storing an entry's content.
    pub fn content_path(&self, key: &CacheKey) -> PathBuf {
        self.root.join(key.as_str())
    }

    /// Store content under `key`, replacing any previous value.
    ///
    /// A failed store never leaves a partial entry behind.
    pub fn store(&self, key: &CacheKey, content: &str) -> Result<()> {
        self.ensure_dir()?;

        let path = self.content_path(key);
        write_atomic(&path, content.as_bytes())
            .with_context(|| format!("Failed to write cache entry {:?}", path))
    }

    /// Load an entry's metadata, or `None` if nothing is cached for `key`.
    pub fn load(&self, key: &CacheKey) -> Result<Option<CacheEntry>> {
        let path = self.content_path(key);

        if !path.is_file() {
            return Ok(None);
        }

        entry_from_path(key.as_str(), &path).map(Some)
    }

    /// Read the cached content.
    pub fn read_content(&self, entry: &CacheEntry) -> Result<String> {
        fs::read_to_string(&entry.content_path).with_context(|| {
            format!(
                "Failed to read cached content from {:?}",
                entry.content_path
            )
        })
    }

    /// Return the cached content for `key` if it is younger than `window`.
    ///
    /// Missing, stale, and unreadable entries all yield `None`.
    pub fn read_fresh(&self, key: &CacheKey, window: Duration) -> Option<String> {
        let entry = match self.load(key) {
            Ok(Some(entry)) => entry,
            Ok(None) => return None,
            Err(e) => {
                tracing::debug!("Ignoring cache entry {}: {:#}", key, e);
                return None;
            }
        };

        if !entry.is_fresh(window) {
            tracing::debug!(
                "Cache entry {} is stale ({}s old)",
                key,
                entry.age().as_secs()
            );
            return None;
        }

        match self.read_content(&entry) {
            Ok(content) => Some(content),
            Err(e) => {
                tracing::debug!("Ignoring cache entry {}: {:#}", key, e);
                None
            }
        }
    }

    /// List all cached entries, newest first.
    pub fn list(&self) -> Result<Vec<CacheEntry>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();

        for dir_entry in fs::read_dir(&self.root)
            .with_context(|| format!("Failed to read cache directory {:?}", self.root))?
        {
            let path = dir_entry?.path();

            if !path.is_file() {
                continue;
            }

            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };

            // In-flight writes
            if name.starts_with('.') {
                continue;
            }

            if let Ok(entry) = entry_from_path(name, &path) {
                entries.push(entry);
            }
        }

        entries.sort_by(|a, b| b.modified.cmp(&a.modified));
        Ok(entries)
    }

    /// Get total cache size in bytes.
    pub fn total_size(&self) -> Result<u64> {
        Ok(self.list()?.iter().map(|e| e.size_bytes).sum())
    }
}

fn entry_from_path(key: &str, path: &Path) -> Result<CacheEntry> {
    let metadata =
        fs::metadata(path).with_context(|| format!("Failed to stat cache entry {:?}", path))?;

    Ok(CacheEntry {
        key: key.to_string(),
        content_path: path.to_path_buf(),
        modified: metadata.modified()?,
        size_bytes: metadata.len(),
    })
}
