//! Metadata report for generated playlist files.
//!
//! Scans a directory for playlists and guides and writes two summaries next
//! to them: `files_metadata.json` and a browsable `index.html`.

pub mod report;
pub mod scan;

pub use report::{format_bytes, render_html, render_json, write_html, write_json, HTML_FILE, JSON_FILE};
pub use scan::{scan_directory, FileInfo, FilesMetadata, TRACKED_SUFFIXES};
