//! Sequential batch runner.

use crate::config::PlaylistEntry;
use crate::fetch::{FetchOutcome, Fetcher, Sleeper, Transport};

/// Result of one manifest entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemStatus {
    /// The fetcher finished; see the outcome for success or exhaustion.
    Completed(FetchOutcome),
    /// The destination could not be written.
    Failed(String),
}

/// One processed entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchItem {
    pub entry: PlaylistEntry,
    pub status: ItemStatus,
}

impl BatchItem {
    pub fn succeeded(&self) -> bool {
        matches!(&self.status, ItemStatus::Completed(outcome) if outcome.succeeded())
    }
}

/// Outcome of a whole batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub items: Vec<BatchItem>,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn succeeded(&self) -> usize {
        self.items.iter().filter(|i| i.succeeded()).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &BatchItem> {
        self.items.iter().filter(|i| !i.succeeded())
    }

    pub fn all_succeeded(&self) -> bool {
        self.succeeded() == self.total()
    }

    /// One-line report, e.g. `Download complete: 2/3 playlists downloaded successfully`.
    pub fn summary_line(&self) -> String {
        format!(
            "Download complete: {}/{} playlists downloaded successfully",
            self.succeeded(),
            self.total()
        )
    }
}

/// Fetch every entry in order with the given attempt budget.
pub fn run_batch<T: Transport, S: Sleeper>(
    fetcher: &Fetcher<T, S>,
    entries: &[PlaylistEntry],
    max_attempts: u32,
) -> BatchSummary {
    let mut summary = BatchSummary::default();

    for (index, entry) in entries.iter().enumerate() {
        tracing::debug!(
            "[{}/{}] {} -> {}",
            index + 1,
            entries.len(),
            entry.url,
            entry.output.display()
        );

        let status = match fetcher.fetch(&entry.url, &entry.output, max_attempts) {
            Ok(outcome) => {
                if !outcome.succeeded() {
                    tracing::warn!("Giving up on {} after {:?}", entry.url, outcome);
                }
                ItemStatus::Completed(outcome)
            }
            Err(e) => {
                tracing::warn!("Failed to save {}: {}", entry.output.display(), e);
                ItemStatus::Failed(e.to_string())
            }
        };

        summary.items.push(BatchItem {
            entry: entry.clone(),
            status,
        });
    }

    summary
}
