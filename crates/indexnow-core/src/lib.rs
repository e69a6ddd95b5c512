//! Core library for the `indexnow` submission tool.
//!
//! Collects URLs from sitemaps, RSS/Atom feeds, or flat files, applies an
//! optional age cutoff, and submits the survivors to a search engine via the
//! IndexNow protocol.

pub mod config;
pub mod logging;

pub mod age;
pub mod collect;
pub mod error;
pub mod feed;
pub mod key;
pub mod sitemap;
pub mod submit;
pub mod url_file;

mod fetch;

pub use error::{Error, Result};
