// Output formatting — terminal display and report files.

pub mod markdown;
pub mod terminal;

use std::path::Path;

use anyhow::{Context, Result};

use crate::asteroid::models::EnrichedAsteroidRecord;

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Respects UTF-8 character boundaries, so asteroid names with non-ASCII
/// characters never cause a panic.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

/// Write `contents` to `path`, creating parent directories as needed.
/// Returns the path as a display string.
pub fn write_file(path: &str, contents: &str) -> Result<String> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create output directory for {path}"))?;
        }
    }
    std::fs::write(path, contents).with_context(|| format!("Failed to write {path}"))?;
    Ok(path.to_string())
}

/// Pretty JSON array of the first `limit` ranked records, for external renderers.
pub fn render_json(records: &[EnrichedAsteroidRecord], limit: usize) -> Result<String> {
    let visible: Vec<&EnrichedAsteroidRecord> = records.iter().take(limit).collect();
    serde_json::to_string_pretty(&visible).context("Failed to serialize ranked records")
}
