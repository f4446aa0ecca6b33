//! `playfetch fetch` command implementation.

use std::path::PathBuf;

use crate::cli::args::FetchArgs;
use crate::config::FetcherConfig;
use crate::error::Result;
use crate::fetch::{FetchOutcome, Fetcher};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Fetches one URL into one file.
pub struct FetchCommand {
    cache_dir: Option<PathBuf>,
    args: FetchArgs,
}

impl FetchCommand {
    pub fn new(cache_dir: Option<PathBuf>, args: FetchArgs) -> Self {
        Self { cache_dir, args }
    }
}

impl Command for FetchCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = FetcherConfig::resolve(self.cache_dir.as_deref(), None);
        let fetcher = Fetcher::new(config)?;

        let outcome = fetcher.fetch(&self.args.url, &self.args.output, self.args.attempts)?;
        report_outcome(&self.args.url, &self.args.output, outcome, ui);

        Ok(if outcome.succeeded() {
            CommandResult::success()
        } else {
            CommandResult::failure(1)
        })
    }
}

/// Print one line describing how a fetch ended.
pub(crate) fn report_outcome(
    url: &str,
    output: &std::path::Path,
    outcome: FetchOutcome,
    ui: &mut dyn UserInterface,
) {
    match outcome {
        FetchOutcome::Cached => {
            ui.success(&format!("Playlist saved: {} (cached)", output.display()));
        }
        FetchOutcome::Downloaded { attempts: 1 } => {
            ui.success(&format!("Playlist saved: {}", output.display()));
        }
        FetchOutcome::Downloaded { attempts } => {
            ui.success(&format!(
                "Playlist saved: {} (after {} attempts)",
                output.display(),
                attempts
            ));
        }
        FetchOutcome::Exhausted { attempts } => {
            ui.error(&format!(
                "Could not fetch {} after {} attempts",
                url, attempts
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::path::Path;

    #[test]
    fn reports_cached_save() {
        let mut ui = MockUI::new();
        report_outcome("u", Path::new("a.m3u"), FetchOutcome::Cached, &mut ui);
        assert!(ui.has_success("a.m3u (cached)"));
    }

    #[test]
    fn reports_retried_download() {
        let mut ui = MockUI::new();
        report_outcome(
            "u",
            Path::new("a.m3u"),
            FetchOutcome::Downloaded { attempts: 3 },
            &mut ui,
        );
        assert!(ui.has_success("after 3 attempts"));
    }

    #[test]
    fn reports_exhaustion_as_error() {
        let mut ui = MockUI::new();
        report_outcome(
            "https://example.com/x",
            Path::new("a.m3u"),
            FetchOutcome::Exhausted { attempts: 3 },
            &mut ui,
        );
        assert!(ui.has_error("https://example.com/x"));
        assert!(ui.successes().is_empty());
    }
}
