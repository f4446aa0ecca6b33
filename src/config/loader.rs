//! Manifest loading and validation.

use crate::config::schema::Manifest;
use crate::error::{PlayfetchError, Result};
use std::fs;
use std::path::Path;

/// Default manifest filename, relative to the working directory.
pub const DEFAULT_MANIFEST: &str = "playlists.yml";

/// Load and validate a manifest file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
/// Returns `ConfigValidationError` if an entry is incomplete.
pub fn load_manifest(path: &Path) -> Result<Manifest> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PlayfetchError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            PlayfetchError::Io(e)
        }
    })?;

    let manifest = parse_manifest(&content, path)?;
    validate(&manifest)?;

    tracing::debug!(
        "Loaded {} playlists from {}",
        manifest.playlists.len(),
        path.display()
    );

    Ok(manifest)
}

/// Parse YAML content into a [`Manifest`].
///
/// An empty document is an empty manifest.
pub fn parse_manifest(content: &str, source_path: &Path) -> Result<Manifest> {
    if content.trim().is_empty() {
        return Ok(Manifest::default());
    }

    serde_yaml::from_str(content).map_err(|e| PlayfetchError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Check that every entry names both a source and a destination.
pub fn validate(manifest: &Manifest) -> Result<()> {
    for (index, entry) in manifest.playlists.iter().enumerate() {
        if entry.url.trim().is_empty() {
            return Err(PlayfetchError::ConfigValidationError {
                message: format!("playlist #{} has an empty url", index + 1),
            });
        }
        if entry.output.as_os_str().is_empty() {
            return Err(PlayfetchError::ConfigValidationError {
                message: format!("playlist #{} ({}) has an empty output", index + 1, entry.url),
            });
        }
    }
    Ok(())
}
