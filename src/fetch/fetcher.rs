//! Cache-or-fetch with retries.

use chrono::Local;
use std::path::Path;
use tracing::{debug, info, warn};

use super::http::{HttpTransport, Transport};
use super::retry::{backoff_delay, Sleeper, ThreadSleeper};
use crate::cache::{CacheKey, CacheStore};
use crate::config::FetcherConfig;
use crate::error::Result;
use crate::output::write_playlist;

/// How a call to [`Fetcher::fetch`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// A fresh cache entry was written to the destination; no request made.
    Cached,
    /// The playlist was downloaded on attempt number `attempts`.
    Downloaded { attempts: u32 },
    /// Every attempt failed; the destination was left alone.
    Exhausted { attempts: u32 },
}

impl FetchOutcome {
    /// Whether the destination now holds the playlist.
    pub fn succeeded(&self) -> bool {
        !matches!(self, Self::Exhausted { .. })
    }
}

/// Fetches playlists into destination files, through the cache.
///
/// # Example
///
/// ```no_run
/// use playfetch::config::FetcherConfig;
/// use playfetch::fetch::{Fetcher, DEFAULT_MAX_ATTEMPTS};
/// use std::path::Path;
///
/// let fetcher = Fetcher::new(FetcherConfig::default()).unwrap();
/// let outcome = fetcher
///     .fetch("https://example.com/live.m3u", Path::new("live.m3u"), DEFAULT_MAX_ATTEMPTS)
///     .unwrap();
/// assert!(outcome.succeeded());
/// ```
pub struct Fetcher<T = HttpTransport, S = ThreadSleeper> {
    config: FetcherConfig,
    cache: CacheStore,
    transport: T,
    sleeper: S,
}

impl Fetcher {
    /// Create a fetcher that talks HTTP and really sleeps between attempts.
    ///
    /// Creates the cache directory if it is missing.
    pub fn new(config: FetcherConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Self::with_parts(config, transport, ThreadSleeper)
    }
}

impl<T: Transport, S: Sleeper> Fetcher<T, S> {
    /// Create a fetcher with a custom transport and sleeper.
    ///
    /// Creates the cache directory if it is missing.
    pub fn with_parts(config: FetcherConfig, transport: T, sleeper: S) -> Result<Self> {
        let cache = CacheStore::new(&config.cache_dir);
        cache.ensure_dir()?;

        Ok(Self {
            config,
            cache,
            transport,
            sleeper,
        })
    }

    pub fn cache(&self) -> &CacheStore {
        &self.cache
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn sleeper(&self) -> &S {
        &self.sleeper
    }

    /// Write the playlist at `url` to `destination`.
    ///
    /// A cache entry younger than the freshness window is used without any
    /// request. Otherwise up to `max_attempts` requests are made, with the
    /// backoff delay between them; the first successful body is cached and
    /// written.
    ///
    /// Network failures never produce an `Err`: they are logged and, once
    /// the attempts run out, reported as [`FetchOutcome::Exhausted`]. An
    /// `Err` means the destination itself could not be written.
    pub fn fetch(&self, url: &str, destination: &Path, max_attempts: u32) -> Result<FetchOutcome> {
        let key = CacheKey::for_url(url);

        if let Some(content) = self.cache.read_fresh(&key, self.config.freshness_window) {
            debug!("Cache hit for {} ({})", url, key);
            write_playlist(destination, &content, Local::now())?;
            info!("Playlist saved from cache: {}", destination.display());
            return Ok(FetchOutcome::Cached);
        }

        for attempt in 0..max_attempts {
            match self.transport.get(url) {
                Ok(body) => {
                    if let Err(e) = self.cache.store(&key, &body) {
                        warn!("Could not cache {}: {:#}", url, e);
                    }

                    write_playlist(destination, &body, Local::now())?;
                    info!("Playlist saved: {}", destination.display());
                    return Ok(FetchOutcome::Downloaded {
                        attempts: attempt + 1,
                    });
                }
                Err(e) => {
                    warn!("Attempt {} failed for {}: {}", attempt + 1, url, e);

                    if attempt + 1 < max_attempts {
                        let delay = backoff_delay(attempt);
                        debug!("Retrying {} in {}s", url, delay.as_secs());
                        self.sleeper.sleep(delay);
                    }
                }
            }
        }

        Ok(FetchOutcome::Exhausted {
            attempts: max_attempts,
        })
    }
}
