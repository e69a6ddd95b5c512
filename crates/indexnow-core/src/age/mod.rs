//! Age cutoff: timestamp parsing and recency filtering.
//!
//! One retention rule for every source kind: an element survives iff its age
//! in seconds is strictly less than the cutoff. Elements whose timestamp is
//! missing or unparseable are dropped while a cutoff is active (they cannot
//! be shown to be recent) and kept when no cutoff is given.

mod duration;

pub use duration::parse_iso8601_seconds;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::feed::FeedItem;
use crate::sitemap::SitemapEntry;

/// Parses a sitemap `<lastmod>` value: W3C datetime (RFC 3339), a datetime
/// without a zone (taken as UTC), or a bare date (midnight UTC).
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Some(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}

/// True when `timestamp` is within `max_secs` of `now` (strictly newer than
/// the cutoff boundary). `None` timestamps are never within the window.
fn within_window(timestamp: Option<DateTime<Utc>>, max_secs: i64, now: DateTime<Utc>) -> bool {
    match timestamp {
        Some(ts) => (now - ts).num_seconds() < max_secs,
        None => false,
    }
}

/// Filters sitemap entries on their primary `lastmod` value.
/// `max_secs = None` is the identity.
pub fn filter_entries(
    entries: Vec<SitemapEntry>,
    max_secs: Option<i64>,
    now: DateTime<Utc>,
) -> Vec<SitemapEntry> {
    let Some(max_secs) = max_secs else {
        return entries;
    };
    entries
        .into_iter()
        .filter(|entry| {
            let ts = entry
                .last_modified
                .as_ref()
                .and_then(|values| values.first())
                .and_then(|value| parse_timestamp(value));
            within_window(ts, max_secs, now)
        })
        .collect()
}

/// Filters feed items on their publication date.
/// `max_secs = None` is the identity.
pub fn filter_items(
    items: Vec<FeedItem>,
    max_secs: Option<i64>,
    now: DateTime<Utc>,
) -> Vec<FeedItem> {
    let Some(max_secs) = max_secs else {
        return items;
    };
    items
        .into_iter()
        .filter(|item| within_window(item.published, max_secs, now))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(url: &str, lastmod: Option<&str>) -> SitemapEntry {
        SitemapEntry {
            locations: vec![url.to_string()],
            last_modified: lastmod.map(|v| vec![v.to_string()]),
            change_frequency: None,
            priority: None,
            image: None,
        }
    }

    fn now() -> DateTime<Utc> {
        "2024-01-10T00:00:00Z".parse().unwrap()
    }

    #[test]
    fn parse_timestamp_accepts_w3c_shapes() {
        assert!(parse_timestamp("2024-01-08T00:00:00Z").is_some());
        assert!(parse_timestamp("2024-01-08T12:30:00+02:00").is_some());
        assert!(parse_timestamp("2024-01-08T12:30:00").is_some());
        assert!(parse_timestamp("2024-01-08").is_some());
        assert!(parse_timestamp("last tuesday").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn no_cutoff_is_identity() {
        let entries = vec![
            entry("https://a/", Some("2020-01-01")),
            entry("https://b/", None),
        ];
        let out = filter_entries(entries.clone(), None, now());
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].locations, entries[0].locations);
        assert_eq!(out[1].locations, entries[1].locations);
    }

    #[test]
    fn entry_older_than_cutoff_is_excluded() {
        // Cutoff P5D = 432000s; the entry is 9 days old.
        let entries = vec![entry("https://a/", Some("2024-01-01T00:00:00Z"))];
        assert!(filter_entries(entries, Some(432_000), now()).is_empty());
    }

    #[test]
    fn entry_within_cutoff_is_retained() {
        // 2 days old against a 5 day cutoff.
        let entries = vec![entry("https://a/", Some("2024-01-08T00:00:00Z"))];
        assert_eq!(filter_entries(entries, Some(432_000), now()).len(), 1);
    }

    #[test]
    fn entry_exactly_at_boundary_is_excluded() {
        // Age == cutoff fails the strict comparison on both source kinds.
        let entries = vec![entry("https://a/", Some("2024-01-05T00:00:00Z"))];
        assert!(filter_entries(entries, Some(432_000), now()).is_empty());

        let items = vec![FeedItem {
            link: "https://a/".to_string(),
            published: Some("2024-01-05T00:00:00Z".parse().unwrap()),
        }];
        assert!(filter_items(items, Some(432_000), now()).is_empty());
    }

    #[test]
    fn missing_or_unparseable_timestamp_is_excluded_under_cutoff() {
        let entries = vec![
            entry("https://a/", None),
            entry("https://b/", Some("not a date")),
        ];
        assert!(filter_entries(entries, Some(432_000), now()).is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let entries = vec![
            entry("https://a/", Some("2024-01-08T00:00:00Z")),
            entry("https://b/", Some("2024-01-01T00:00:00Z")),
            entry("https://c/", None),
        ];
        let once = filter_entries(entries, Some(432_000), now());
        let twice = filter_entries(once.clone(), Some(432_000), now());
        assert_eq!(once.len(), 1);
        assert_eq!(
            once.iter().map(|e| &e.locations).collect::<Vec<_>>(),
            twice.iter().map(|e| &e.locations).collect::<Vec<_>>()
        );
    }

    #[test]
    fn feed_items_use_publication_date() {
        let items = vec![
            FeedItem {
                link: "https://new/".to_string(),
                published: Some("2024-01-09T12:00:00Z".parse().unwrap()),
            },
            FeedItem {
                link: "https://old/".to_string(),
                published: Some("2023-06-01T00:00:00Z".parse().unwrap()),
            },
            FeedItem {
                link: "https://undated/".to_string(),
                published: None,
            },
        ];
        let out = filter_items(items, Some(432_000), now());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].link, "https://new/");
    }
}
