//! Error taxonomy for URL collection and submission.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// No source URL was given (empty argument).
    #[error("no URL given")]
    MissingUrl,

    /// No search engine host available from flags or config.
    #[error("no search engine given (pass --engine or set default_engine in config)")]
    MissingEngine,

    /// Engine host does not form a valid https endpoint.
    #[error("invalid search engine host {0:?}")]
    InvalidEngine(String),

    /// Age cutoff string does not match the ISO-8601 duration grammar.
    #[error("malformed duration {0:?} (expected ISO-8601, e.g. P10D or PT1H30M)")]
    MalformedDuration(String),

    /// Fetching or parsing a sitemap failed.
    #[error("fetching sitemap {url} failed: {source}")]
    SitemapFetch {
        url: String,
        #[source]
        source: anyhow::Error,
    },

    /// Fetching or parsing a feed failed (network, filesystem, or parse).
    #[error("fetching feed {url} failed: {source}")]
    FeedFetch {
        url: String,
        #[source]
        source: anyhow::Error,
    },

    /// Key flags/config do not resolve to exactly one key source.
    #[error("key configuration: {0}")]
    KeyConfiguration(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
