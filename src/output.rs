//! Timestamped playlist output.
//!
//! Every written playlist starts with a single comment line recording when it
//! was generated, followed by the fetched content verbatim.

use chrono::{DateTime, Local};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{PlayfetchError, Result};

/// `strftime` format of the header line (without the trailing newline).
pub const HEADER_FORMAT: &str = "# Updated at %d/%m/%Y - %H:%M:%S %:z";

/// Header line for `now`, newline included.
pub fn timestamp_header(now: DateTime<Local>) -> String {
    format!("{}\n", now.format(HEADER_FORMAT))
}

/// Header followed by `content`.
pub fn compose(now: DateTime<Local>, content: &str) -> String {
    let mut text = timestamp_header(now);
    text.push_str(content);
    text
}

/// Overwrite `path` with the header and `content`.
///
/// The previous file stays in place until the new one is complete.
pub fn write_playlist(path: &Path, content: &str, now: DateTime<Local>) -> Result<()> {
    write_atomic(path, compose(now, content).as_bytes()).map_err(|source| {
        PlayfetchError::OutputWrite {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Hidden sibling of `path` used while a write is in flight.
pub(crate) fn staging_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.tmp", name))
}

/// Write to a temp file next to `path`, then rename it over `path`.
pub(crate) fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    let temp_path = staging_path(path);

    if let Err(e) = fs::write(&temp_path, contents) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    fs::rename(&temp_path, path).inspect_err(|_| {
        let _ = fs::remove_file(&temp_path);
    })
}

/// Split a written playlist into its header line and body.
pub fn split_header(text: &str) -> Option<(&str, &str)> {
    let (header, body) = text.split_once('\n')?;
    header.starts_with("# ").then_some((header, body))
}
