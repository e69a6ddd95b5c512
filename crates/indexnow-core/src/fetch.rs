//! HTTP GET helper on the curl easy API.
//!
//! Fetches a body into memory with redirects followed and gzip accepted.
//! Runs in the current thread; call from `spawn_blocking` if used from async
//! code.

use anyhow::{Context, Result};
use std::time::Duration;

/// Performs a GET and returns the response body on a 2xx status.
pub(crate) fn fetch_bytes(url: &str, timeout: Duration) -> Result<Vec<u8>> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).context("invalid URL")?;
    easy.follow_location(true)?;
    easy.accept_encoding("gzip")?;
    easy.connect_timeout(Duration::from_secs(15))?;
    easy.timeout(timeout)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer
            .perform()
            .with_context(|| format!("GET {} failed", url))?;
    }

    let code = easy.response_code().context("no response code")?;
    if !(200..300).contains(&code) {
        anyhow::bail!("GET {} returned HTTP {}", url, code);
    }

    Ok(body)
}
