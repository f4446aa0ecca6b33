//! `playfetch metadata` command implementation.

use crate::cli::args::MetadataArgs;
use crate::error::Result;
use crate::metadata::{scan_directory, write_html, write_json, FilesMetadata, HTML_FILE, JSON_FILE};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Writes the JSON and HTML reports for a directory.
pub struct MetadataCommand {
    args: MetadataArgs,
}

impl MetadataCommand {
    pub fn new(args: MetadataArgs) -> Self {
        Self { args }
    }
}

impl Command for MetadataCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let dir = &self.args.dir;
        let files = scan_directory(dir)?;
        let metadata = FilesMetadata::new(files);

        tracing::debug!(
            "Found {} files ({} bytes) in {}",
            metadata.total_files,
            metadata.total_size,
            dir.display()
        );

        // Each report is written independently of the other.
        let mut failed = false;

        match write_json(&metadata, dir) {
            Ok(()) => ui.success(&format!("Metadata written: {}", JSON_FILE)),
            Err(e) => {
                ui.error(&format!("{:#}", e));
                failed = true;
            }
        }

        match write_html(&metadata, dir) {
            Ok(()) => ui.success(&format!("HTML written: {}", HTML_FILE)),
            Err(e) => {
                ui.error(&format!("{:#}", e));
                failed = true;
            }
        }

        Ok(if failed {
            CommandResult::failure(1)
        } else {
            CommandResult::success()
        })
    }
}
