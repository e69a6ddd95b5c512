//! Flat URL list files: one URL per line.
//!
//! The read side tolerates CRLF and blank lines (files written by other
//! tools routinely end with one); the write side always ends with a
//! newline so the output appends cleanly.

use anyhow::Context;
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Reads a URL list, skipping blank lines.
pub fn read_url_list(path: &Path) -> Result<Vec<String>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read URL list {}", path.display()))?;
    Ok(data
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Writes a URL list, one per line with a trailing newline.
pub fn write_url_list(path: &Path, urls: &[String]) -> Result<()> {
    let mut out = urls.join("\n");
    out.push('\n');
    fs::write(path, out).with_context(|| format!("write URL list {}", path.display()))?;
    Ok(())
}
