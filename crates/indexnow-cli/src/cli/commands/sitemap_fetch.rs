//! `indexnow sitemap-fetch <url> -o <file>` – collect sitemap URLs to a file.

use anyhow::Result;
use indexnow_core::config::IndexNowConfig;
use indexnow_core::{collect, url_file};
use std::path::Path;

/// Fetch a sitemap (filtered by `max_age` when given) and write its primary
/// URLs, one per line.
pub async fn run_sitemap_fetch(
    cfg: &IndexNowConfig,
    url: String,
    output: &Path,
    max_age: Option<String>,
) -> Result<()> {
    let timeout = cfg.fetch_timeout();
    let entries = tokio::task::spawn_blocking(move || {
        collect::from_sitemap(&url, timeout, max_age.as_deref())
    })
    .await??;

    let urls = collect::primary_urls(&entries);
    url_file::write_url_list(output, &urls)?;
    println!("Wrote {} URL(s) to {}", urls.len(), output.display());
    Ok(())
}
