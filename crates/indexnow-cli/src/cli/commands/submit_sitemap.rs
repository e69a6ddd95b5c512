//! `indexnow submit-from-sitemap <url>` – collect from a sitemap and
//! bulk-submit in one step.

use anyhow::Result;
use indexnow_core::collect;
use indexnow_core::config::IndexNowConfig;
use indexnow_core::submit::{self, CurlTransport};

use super::print_submission;

pub async fn run_submit_sitemap(
    cfg: &IndexNowConfig,
    url: String,
    engine: String,
    host: String,
    key: String,
    max_age: Option<String>,
    key_location: Option<String>,
) -> Result<()> {
    let timeout = cfg.fetch_timeout();

    let result = tokio::task::spawn_blocking({
        let engine = engine.clone();
        move || -> indexnow_core::Result<(usize, Option<u32>)> {
            let entries = collect::from_sitemap(&url, timeout, max_age.as_deref())?;
            let urls = collect::primary_urls(&entries);
            let status = submit::submit_url_list(
                &CurlTransport,
                &engine,
                &host,
                &key,
                key_location.as_deref(),
                &urls,
                timeout,
            )?;
            Ok((urls.len(), status))
        }
    })
    .await?;
    let (count, status) = result?;

    print_submission(&engine, count, status);
    Ok(())
}
