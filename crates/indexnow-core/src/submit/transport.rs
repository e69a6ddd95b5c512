//! Submission transport: the HTTP seam, with a curl-backed production impl.

use anyhow::{Context, Result};
use std::time::Duration;
use url::Url;

/// Outbound HTTP used for submissions. Implementations return the response
/// status code; tests substitute a recording mock.
pub trait Transport: Send + Sync {
    /// Single-URL submission: GET with url/key in the query string.
    fn get(&self, url: &Url, timeout: Duration) -> Result<u32>;

    /// Bulk submission: POST with a JSON body.
    fn post_json(&self, url: &Url, body: &[u8], timeout: Duration) -> Result<u32>;
}

/// Production transport on the curl easy API. Runs in the current thread;
/// call from `spawn_blocking` in async code.
pub struct CurlTransport;

impl CurlTransport {
    fn prepare(url: &Url, timeout: Duration) -> Result<curl::easy::Easy> {
        let mut easy = curl::easy::Easy::new();
        easy.url(url.as_str()).context("invalid URL")?;
        easy.follow_location(true)?;
        easy.connect_timeout(Duration::from_secs(15))?;
        easy.timeout(timeout)?;
        Ok(easy)
    }

    fn perform(mut easy: curl::easy::Easy) -> Result<u32> {
        {
            let mut transfer = easy.transfer();
            // Response bodies are not interesting; keep them off stdout.
            transfer.write_function(|data| Ok(data.len()))?;
            transfer.perform().context("request failed")?;
        }
        easy.response_code().context("no response code")
    }
}

impl Transport for CurlTransport {
    fn get(&self, url: &Url, timeout: Duration) -> Result<u32> {
        let easy = Self::prepare(url, timeout)?;
        Self::perform(easy)
    }

    fn post_json(&self, url: &Url, body: &[u8], timeout: Duration) -> Result<u32> {
        let mut easy = Self::prepare(url, timeout)?;
        easy.post(true)?;
        easy.post_fields_copy(body)?;

        let mut headers = curl::easy::List::new();
        headers.append("Content-Type: application/json; charset=utf-8")?;
        easy.http_headers(headers)?;

        Self::perform(easy)
    }
}
