//! Directory scan for generated files.

use anyhow::{Context, Result};
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Filename suffixes included in the report.
pub const TRACKED_SUFFIXES: &[&str] = &[".m3u", ".xml", ".xml.gz", ".json", ".html"];

/// A single reported file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileInfo {
    pub name: String,
    pub size: u64,
    pub modified: DateTime<Utc>,
    /// Last-dot extension, e.g. `.gz` for `guide.xml.gz`.
    pub extension: String,
}

/// Contents of `files_metadata.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilesMetadata {
    pub generated_at: DateTime<Utc>,
    /// UTC offset of the machine that generated the report.
    pub timezone: String,
    pub files: Vec<FileInfo>,
    pub total_files: usize,
    pub total_size: u64,
}

impl FilesMetadata {
    pub fn new(files: Vec<FileInfo>) -> Self {
        let total_size = files.iter().map(|f| f.size).sum();
        Self {
            generated_at: Utc::now(),
            timezone: Local::now().format("%:z").to_string(),
            total_files: files.len(),
            total_size,
            files,
        }
    }
}

/// Whether `name` ends in one of [`TRACKED_SUFFIXES`].
pub fn is_tracked(name: &str) -> bool {
    TRACKED_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

/// Extension after the last dot, dot included; empty if there is none.
pub fn extension_of(name: &str) -> String {
    match name.rfind('.') {
        Some(0) | None => String::new(),
        Some(idx) => name[idx..].to_string(),
    }
}

/// List tracked regular files directly inside `dir`, sorted by name.
pub fn scan_directory(dir: &Path) -> Result<Vec<FileInfo>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir).with_context(|| format!("Failed to read {:?}", dir))? {
        let entry = entry?;
        let metadata = entry.metadata()?;

        if !metadata.is_file() {
            continue;
        }

        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            continue;
        };

        if !is_tracked(&name) {
            continue;
        }

        files.push(FileInfo {
            extension: extension_of(&name),
            size: metadata.len(),
            modified: DateTime::<Utc>::from(metadata.modified()?),
            name,
        });
    }

    files.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn tracked_suffixes() {
        assert!(is_tracked("live.m3u"));
        assert!(is_tracked("guide.xml"));
        assert!(is_tracked("guide.xml.gz"));
        assert!(is_tracked("files_metadata.json"));
        assert!(is_tracked("index.html"));
        assert!(!is_tracked("notes.txt"));
        assert!(!is_tracked("archive.gz"));
        assert!(!is_tracked("live.m3u8"));
    }

    #[test]
    fn extension_uses_last_dot() {
        assert_eq!(extension_of("guide.xml.gz"), ".gz");
        assert_eq!(extension_of("live.m3u"), ".m3u");
        assert_eq!(extension_of("README"), "");
        assert_eq!(extension_of(".hidden"), "");
    }

    #[test]
    fn scan_filters_and_sorts() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("b.m3u"), "12345").unwrap();
        fs::write(temp.path().join("a.xml"), "123").unwrap();
        fs::write(temp.path().join("skip.txt"), "nope").unwrap();
        fs::create_dir(temp.path().join("dir.json")).unwrap();

        let files = scan_directory(temp.path()).unwrap();

        let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a.xml", "b.m3u"]);
        assert_eq!(files[1].size, 5);
        assert_eq!(files[1].extension, ".m3u");
    }

    #[test]
    fn scan_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        assert!(scan_directory(&temp.path().join("absent")).is_err());
    }

    #[test]
    fn totals_are_computed() {
        let files = vec![
            FileInfo {
                name: "a.m3u".into(),
                size: 10,
                modified: Utc::now(),
                extension: ".m3u".into(),
            },
            FileInfo {
                name: "b.m3u".into(),
                size: 32,
                modified: Utc::now(),
                extension: ".m3u".into(),
            },
        ];

        let metadata = FilesMetadata::new(files);

        assert_eq!(metadata.total_files, 2);
        assert_eq!(metadata.total_size, 42);
    }
}
