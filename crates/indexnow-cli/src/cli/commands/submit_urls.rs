//! `indexnow submit-urls <file>` – bulk submission from a flat URL file.

use anyhow::Result;
use indexnow_core::config::IndexNowConfig;
use indexnow_core::submit::{self, CurlTransport};
use indexnow_core::url_file;
use std::path::Path;

use super::print_submission;

pub async fn run_submit_urls(
    cfg: &IndexNowConfig,
    url_file: &Path,
    engine: String,
    host: String,
    key: String,
    key_location: Option<String>,
) -> Result<()> {
    let urls = url_file::read_url_list(url_file)?;
    let timeout = cfg.fetch_timeout();

    let count = urls.len();
    let status = tokio::task::spawn_blocking({
        let engine = engine.clone();
        move || {
            submit::submit_url_list(
                &CurlTransport,
                &engine,
                &host,
                &key,
                key_location.as_deref(),
                &urls,
                timeout,
            )
        }
    })
    .await??;

    print_submission(&engine, count, status);
    Ok(())
}
