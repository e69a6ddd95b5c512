//! RSS/Atom feed fetching and parsing.
//!
//! The only transport branch in the collection path lives here: `file://`
//! URLs (and bare filesystem paths) are read from disk so feeds can come
//! from local files during testing or offline use; everything else is an
//! HTTP GET.

use anyhow::{anyhow, Context, Result as AnyResult};
use chrono::{DateTime, Utc};
use std::path::Path;
use std::time::Duration;
use url::Url;

use crate::error::{Error, Result};
use crate::fetch;

/// One feed item reduced to the fields submission cares about.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedItem {
    pub link: String,
    /// `published`, falling back to `updated` for Atom feeds that omit it.
    pub published: Option<DateTime<Utc>>,
}

/// Fetches a feed and returns its items in feed order.
///
/// Items without a link can never be submitted and are skipped. Any fetch or
/// parse failure surfaces as `FeedFetch` wrapping the cause. Runs in the
/// current thread; call from `spawn_blocking` in async code.
pub fn fetch_items(feed_url: &str, timeout: Duration) -> Result<Vec<FeedItem>> {
    if feed_url.trim().is_empty() {
        return Err(Error::MissingUrl);
    }
    fetch_and_parse(feed_url, timeout).map_err(|source| Error::FeedFetch {
        url: feed_url.to_string(),
        source,
    })
}

fn fetch_and_parse(feed_url: &str, timeout: Duration) -> AnyResult<Vec<FeedItem>> {
    let bytes = match Url::parse(feed_url) {
        Ok(u) if u.scheme() == "file" => {
            let path = u
                .to_file_path()
                .map_err(|_| anyhow!("not a local file path: {}", feed_url))?;
            read_file(&path)?
        }
        Ok(_) => fetch::fetch_bytes(feed_url, timeout)?,
        // Not a URL at all; treat it as a filesystem path.
        Err(_) => read_file(Path::new(feed_url))?,
    };

    let feed = feed_rs::parser::parse(bytes.as_slice()).context("parse feed XML")?;
    Ok(feed
        .entries
        .into_iter()
        .filter_map(|entry| {
            let link = entry.links.first().map(|l| l.href.clone())?;
            Some(FeedItem {
                link,
                published: entry.published.or(entry.updated),
            })
        })
        .collect())
}

fn read_file(path: &Path) -> AnyResult<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("read {}", path.display()))
}
