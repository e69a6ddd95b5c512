//! URL collection: fetch from a source, normalize, apply the age cutoff.
//!
//! The pure pieces (`collect_entries`, `collect_links`) take an injected
//! "now" so filtering is testable without a clock; the `from_*` entry points
//! wire in the real fetchers and `Utc::now()`.

use chrono::{DateTime, Utc};
use std::time::Duration;

use crate::age;
use crate::error::Result;
use crate::feed::{self, FeedItem};
use crate::sitemap::{self, RawEntry, SitemapEntry};

/// Collects entries from a sitemap, recursing through sitemap indexes and
/// filtering by `max_age` (an ISO-8601 duration) when supplied.
pub fn from_sitemap(
    url: &str,
    timeout: Duration,
    max_age: Option<&str>,
) -> Result<Vec<SitemapEntry>> {
    let raw = sitemap::fetch_entries(url, timeout)?;
    collect_entries(raw, max_age, Utc::now())
}

/// Collects surviving item links from an RSS/Atom feed, in feed order.
pub fn from_feed(feed_url: &str, timeout: Duration, max_age: Option<&str>) -> Result<Vec<String>> {
    let items = feed::fetch_items(feed_url, timeout)?;
    collect_links(items, max_age, Utc::now())
}

/// Normalizes raw sitemap entries and applies the cutoff against `now`.
pub fn collect_entries(
    raw: Vec<RawEntry>,
    max_age: Option<&str>,
    now: DateTime<Utc>,
) -> Result<Vec<SitemapEntry>> {
    let entries: Vec<SitemapEntry> = raw.into_iter().filter_map(sitemap::normalize).collect();
    let max_secs = parse_cutoff(max_age)?;
    Ok(age::filter_entries(entries, max_secs, now))
}

/// Applies the cutoff to feed items against `now` and projects their links.
pub fn collect_links(
    items: Vec<FeedItem>,
    max_age: Option<&str>,
    now: DateTime<Utc>,
) -> Result<Vec<String>> {
    let max_secs = parse_cutoff(max_age)?;
    Ok(age::filter_items(items, max_secs, now)
        .into_iter()
        .map(|item| item.link)
        .collect())
}

/// Projects each entry's primary location, the URL that gets submitted.
pub fn primary_urls(entries: &[SitemapEntry]) -> Vec<String> {
    entries
        .iter()
        .map(|entry| entry.locations[0].clone())
        .collect()
}

fn parse_cutoff(max_age: Option<&str>) -> Result<Option<i64>> {
    max_age.map(age::parse_iso8601_seconds).transpose()
}
