//! JSON and HTML renderings of [`FilesMetadata`].

use anyhow::{Context, Result};
use chrono::{DateTime, Local, Utc};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use super::scan::FilesMetadata;

pub const JSON_FILE: &str = "files_metadata.json";
pub const HTML_FILE: &str = "index.html";

const BYTE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Human-readable size: base 1024, at most two decimals, no trailing zeros.
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < BYTE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = format!("{:.2}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, BYTE_UNITS[unit])
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn local_display(time: DateTime<Utc>) -> String {
    time.with_timezone(&Local)
        .format("%d/%m/%Y %H:%M:%S")
        .to_string()
}

pub fn render_json(metadata: &FilesMetadata) -> Result<String> {
    Ok(serde_json::to_string_pretty(metadata)?)
}

pub fn render_html(metadata: &FilesMetadata) -> String {
    let mut rows = String::new();
    for file in &metadata.files {
        // Writing into a String cannot fail.
        let _ = write!(
            rows,
            "\n            <tr>\n                <td>{}</td>\n                <td>{}</td>\n                <td>{}</td>\n                <td>{}</td>\n            </tr>",
            escape_html(&file.name),
            format_bytes(file.size),
            local_display(file.modified),
            escape_html(&file.extension),
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Playlists - Metadata</title>
    <style>
        body {{ font-family: Arial, sans-serif; margin: 20px; }}
        .file-list {{ border-collapse: collapse; width: 100%; }}
        .file-list th, .file-list td {{ border: 1px solid #ddd; padding: 8px; text-align: left; }}
        .file-list th {{ background-color: #f2f2f2; }}
        .summary {{ background: #f9f9f9; padding: 15px; margin-bottom: 20px; }}
    </style>
</head>
<body>
    <h1>Playlist Metadata</h1>
    <div class="summary">
        <p><strong>Generated:</strong> {generated}</p>
        <p><strong>Total files:</strong> {total_files}</p>
        <p><strong>Total size:</strong> {total_size}</p>
    </div>

    <table class="file-list">
        <thead>
            <tr>
                <th>File</th>
                <th>Size</th>
                <th>Modified</th>
                <th>Type</th>
            </tr>
        </thead>
        <tbody>{rows}
        </tbody>
    </table>
</body>
</html>
"#,
        generated = local_display(metadata.generated_at),
        total_files = metadata.total_files,
        total_size = format_bytes(metadata.total_size),
        rows = rows,
    )
}

pub fn write_json(metadata: &FilesMetadata, dir: &Path) -> Result<()> {
    let path = dir.join(JSON_FILE);
    fs::write(&path, render_json(metadata)?).with_context(|| format!("Failed to write {:?}", path))
}

pub fn write_html(metadata: &FilesMetadata, dir: &Path) -> Result<()> {
    let path = dir.join(HTML_FILE);
    fs::write(&path, render_html(metadata)).with_context(|| format!("Failed to write {:?}", path))
}
