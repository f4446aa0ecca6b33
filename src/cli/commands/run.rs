//! `playfetch run` command implementation.

use std::path::PathBuf;

use crate::cli::args::RunArgs;
use crate::config::{load_manifest, FetcherConfig};
use crate::error::Result;
use crate::fetch::Fetcher;
use crate::runner::{run_batch, BatchSummary, ItemStatus};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::fetch::report_outcome;

/// Fetches every playlist listed in a manifest.
pub struct RunCommand {
    cache_dir: Option<PathBuf>,
    args: RunArgs,
}

impl RunCommand {
    pub fn new(cache_dir: Option<PathBuf>, args: RunArgs) -> Self {
        Self { cache_dir, args }
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let manifest = load_manifest(&self.args.manifest)?;
        let config = FetcherConfig::resolve(self.cache_dir.as_deref(), Some(&manifest));
        let fetcher = Fetcher::new(config)?;

        let summary = run_batch(&fetcher, &manifest.playlists, self.args.attempts);
        report_summary(&summary, ui);

        Ok(if summary.all_succeeded() {
            CommandResult::success()
        } else {
            CommandResult::failure(1)
        })
    }
}

fn report_summary(summary: &BatchSummary, ui: &mut dyn UserInterface) {
    for item in &summary.items {
        match &item.status {
            ItemStatus::Completed(outcome) => {
                report_outcome(&item.entry.url, &item.entry.output, *outcome, ui)
            }
            ItemStatus::Failed(reason) => ui.error(reason),
        }
    }

    if summary.all_succeeded() {
        ui.success(&summary.summary_line());
    } else {
        ui.warning(&summary.summary_line());
    }
}
