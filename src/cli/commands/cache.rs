//! Cache command implementation.
//!
//! Provides `playfetch cache list`.

use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cache::{CacheStore, FRESHNESS_WINDOW};
use crate::config::FetcherConfig;
use crate::metadata::format_bytes;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Arguments for the cache command.
#[derive(Debug, Clone, Args)]
pub struct CacheArgs {
    #[command(subcommand)]
    pub command: CacheSubcommand,
}

/// Cache subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum CacheSubcommand {
    /// List cached entries.
    List {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
}

/// The cache command implementation.
pub struct CacheCommand {
    cache_dir: Option<PathBuf>,
    args: CacheArgs,
}

impl CacheCommand {
    pub fn new(cache_dir: Option<PathBuf>, args: CacheArgs) -> Self {
        Self { cache_dir, args }
    }
}

impl Command for CacheCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> crate::error::Result<CommandResult> {
        let config = FetcherConfig::resolve(self.cache_dir.as_deref(), None);
        let store = CacheStore::new(&config.cache_dir);

        match &self.args.command {
            CacheSubcommand::List { json } => list_cache(&store, *json, ui)?,
        }

        Ok(CommandResult::success())
    }
}

fn list_cache(store: &CacheStore, json: bool, ui: &mut dyn UserInterface) -> Result<()> {
    let entries = store.list()?;

    if json {
        ui.message(&serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        ui.message("Cache is empty");
        return Ok(());
    }

    ui.message(&format!(
        "{} cached entries in {}:\n",
        entries.len(),
        store.root().display()
    ));

    for entry in &entries {
        let status = if entry.is_fresh(FRESHNESS_WINDOW) {
            "fresh"
        } else {
            "stale"
        };
        ui.message(&format!(
            "  {}  {:>10}  {:>6}s old  {}",
            entry.key,
            format_bytes(entry.size_bytes),
            entry.age().as_secs(),
            status
        ));
    }

    if ui.output_mode().shows_details() {
        ui.message(&format!("\nTotal: {}", format_bytes(store.total_size()?)));
    }

    Ok(())
}
