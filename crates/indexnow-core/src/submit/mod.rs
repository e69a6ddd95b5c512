//! IndexNow submission: endpoint construction, single GET, bulk POST.
//!
//! Non-2xx statuses are logged but returned to the caller as ordinary
//! values; the protocol has no retry, and a rejected batch must not abort
//! the steps that produced it.

mod transport;

pub use transport::{CurlTransport, Transport};

use serde::Serialize;
use std::time::Duration;
use url::Url;

use crate::error::{Error, Result};

/// Builds `https://<engine>/indexnow` for an engine host like "www.bing.com".
pub fn endpoint(engine: &str) -> Result<Url> {
    let engine = engine.trim();
    if engine.is_empty() {
        return Err(Error::MissingEngine);
    }
    // A slash or space would smuggle path segments into the endpoint.
    if engine.contains('/') || engine.contains(char::is_whitespace) {
        return Err(Error::InvalidEngine(engine.to_string()));
    }
    Url::parse(&format!("https://{}/indexnow", engine))
        .map_err(|_| Error::InvalidEngine(engine.to_string()))
}

/// Bulk submission body, field names fixed by the IndexNow protocol.
#[derive(Debug, Serialize)]
struct SubmitBody<'a> {
    host: &'a str,
    key: &'a str,
    #[serde(rename = "keyLocation", skip_serializing_if = "Option::is_none")]
    key_location: Option<&'a str>,
    #[serde(rename = "urlList")]
    url_list: &'a [String],
}

/// Submits one URL via GET with `url` and `key` query parameters.
pub fn submit_single(
    transport: &dyn Transport,
    engine: &str,
    page_url: &str,
    key: &str,
    timeout: Duration,
) -> Result<u32> {
    if page_url.trim().is_empty() {
        return Err(Error::MissingUrl);
    }
    let mut url = endpoint(engine)?;
    url.query_pairs_mut()
        .append_pair("url", page_url)
        .append_pair("key", key);

    tracing::debug!(%url, "submitting single URL");
    let status = transport.get(&url, timeout)?;
    log_status(engine, 1, status);
    Ok(status)
}

/// Submits a batch via POST JSON `{host, key, keyLocation?, urlList}`.
///
/// An empty list returns `Ok(None)` without touching the transport; an empty
/// submission body would be a pointless request.
pub fn submit_url_list(
    transport: &dyn Transport,
    engine: &str,
    host: &str,
    key: &str,
    key_location: Option<&str>,
    urls: &[String],
    timeout: Duration,
) -> Result<Option<u32>> {
    if urls.is_empty() {
        tracing::info!(engine, "no URLs to submit; skipping submission");
        return Ok(None);
    }

    let url = endpoint(engine)?;
    let body = serde_json::to_vec(&SubmitBody {
        host,
        key,
        key_location,
        url_list: urls,
    })
    .map_err(anyhow::Error::from)?;

    tracing::debug!(%url, count = urls.len(), "submitting URL list");
    let status = transport.post_json(&url, &body, timeout)?;
    log_status(engine, urls.len(), status);
    Ok(Some(status))
}

fn log_status(engine: &str, count: usize, status: u32) {
    if (200..300).contains(&status) {
        tracing::info!(engine, count, status, "submitted");
    } else {
        tracing::error!(engine, count, status, "submission rejected");
    }
}
