//! Playlist fetching.
//!
//! - [`Fetcher`] decides between the cache and the network and writes the
//!   destination file
//! - [`Transport`] / [`HttpTransport`] perform the actual GET
//! - [`Sleeper`] and [`backoff_delay`] implement the retry wait

pub mod fetcher;
pub mod http;
pub mod retry;

pub use fetcher::{FetchOutcome, Fetcher};
pub use http::{FetchError, HttpTransport, Transport};
pub use retry::{backoff_delay, RecordingSleeper, Sleeper, ThreadSleeper, DEFAULT_MAX_ATTEMPTS};
