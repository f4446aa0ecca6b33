//! Batch processing of a playlist manifest.
//!
//! Entries are fetched one after another. A failing entry is recorded and
//! the batch moves on; nothing aborts the whole run.

pub mod batch;

pub use batch::{run_batch, BatchItem, BatchSummary, ItemStatus};
