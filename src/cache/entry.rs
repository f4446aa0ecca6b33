//! Cache entry inspection.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;
use std::time::{Duration, SystemTime};

/// A cached playlist on disk.
#[derive(Debug, Clone, Serialize)]
pub struct CacheEntry {
    /// Digest of the source URL (the filename).
    pub key: String,
    /// Path to the cached content.
    pub content_path: PathBuf,
    /// Filesystem modification time, used as the time the entry was cached.
    #[serde(serialize_with = "serialize_system_time")]
    pub modified: SystemTime,
    /// Size in bytes.
    pub size_bytes: u64,
}

impl CacheEntry {
    /// Age of the entry relative to `now`.
    ///
    /// A modification time in the future yields a zero age.
    pub fn age_at(&self, now: SystemTime) -> Duration {
        now.duration_since(self.modified).unwrap_or(Duration::ZERO)
    }

    /// Age of the entry right now.
    pub fn age(&self) -> Duration {
        self.age_at(SystemTime::now())
    }

    /// Whether the entry is younger than `window` at `now`.
    pub fn is_fresh_at(&self, window: Duration, now: SystemTime) -> bool {
        self.age_at(now) < window
    }

    /// Whether the entry is younger than `window`.
    pub fn is_fresh(&self, window: Duration) -> bool {
        self.is_fresh_at(window, SystemTime::now())
    }

    /// Modification time as a UTC timestamp.
    pub fn cached_at(&self) -> DateTime<Utc> {
        DateTime::<Utc>::from(self.modified)
    }
}

fn serialize_system_time<S>(time: &SystemTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&DateTime::<Utc>::from(*time).to_rfc3339())
}
