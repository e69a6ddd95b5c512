//! Sitemap fetching, with transparent sitemap-index recursion.

mod parse;

pub use parse::{normalize, parse_document, RawEntry, RawRecord, SitemapDocument};

use anyhow::{Context, Result as AnyResult};
use std::time::Duration;

use crate::error::{Error, Result};
use crate::fetch;

/// Maximum sitemap-index nesting before giving up (guards against cycles).
const MAX_INDEX_DEPTH: usize = 5;

/// One normalized sitemap entry.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    /// Entry URLs, in document order. Never empty past the normalizer.
    pub locations: Vec<String>,
    /// `<lastmod>` values, one per location slot when present.
    pub last_modified: Option<Vec<String>>,
    /// `<changefreq>` values; preserved, not used by filtering.
    pub change_frequency: Option<Vec<String>>,
    /// `<priority>` values; preserved, not used by filtering.
    pub priority: Option<Vec<String>>,
    /// `<image:image>/<image:loc>` values; preserved, not used by filtering.
    pub image: Option<Vec<String>>,
}

/// Fetches a sitemap and returns its raw entries in document order,
/// recursing into sitemap-of-sitemaps indirection.
///
/// Child sitemaps that fail to fetch or parse are logged and skipped rather
/// than failing the whole collection; only the top-level sitemap is fatal.
/// Runs in the current thread; call from `spawn_blocking` in async code.
pub fn fetch_entries(url: &str, timeout: Duration) -> Result<Vec<RawEntry>> {
    if url.trim().is_empty() {
        return Err(Error::MissingUrl);
    }
    let mut entries = Vec::new();
    fetch_into(url, timeout, 0, &mut entries).map_err(|source| Error::SitemapFetch {
        url: url.to_string(),
        source,
    })?;
    Ok(entries)
}

fn fetch_into(
    url: &str,
    timeout: Duration,
    depth: usize,
    entries: &mut Vec<RawEntry>,
) -> AnyResult<()> {
    if depth > MAX_INDEX_DEPTH {
        anyhow::bail!("sitemap index nesting exceeds {} levels", MAX_INDEX_DEPTH);
    }

    let bytes = fetch::fetch_bytes(url, timeout)?;
    let text = String::from_utf8_lossy(&bytes);
    let document = parse::parse_document(&text).with_context(|| format!("sitemap {}", url))?;

    match document {
        SitemapDocument::UrlSet(raw) => {
            tracing::debug!(url, count = raw.len(), "fetched sitemap url set");
            entries.extend(raw);
        }
        SitemapDocument::Index(children) => {
            tracing::debug!(url, children = children.len(), "fetched sitemap index");
            for child in children {
                if let Err(err) = fetch_into(&child, timeout, depth + 1, entries) {
                    tracing::warn!(url = %child, "skipping child sitemap: {:#}", err);
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_url_is_rejected_before_any_io() {
        assert!(matches!(
            fetch_entries("", Duration::from_secs(1)),
            Err(Error::MissingUrl)
        ));
        assert!(matches!(
            fetch_entries("   ", Duration::from_secs(1)),
            Err(Error::MissingUrl)
        ));
    }
}
