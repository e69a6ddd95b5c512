//! `indexnow submit-single <url>` – submit one URL via GET.

use anyhow::Result;
use indexnow_core::config::IndexNowConfig;
use indexnow_core::submit::{self, CurlTransport};

pub async fn run_submit_single(
    cfg: &IndexNowConfig,
    url: String,
    engine: String,
    key: String,
) -> Result<()> {
    let timeout = cfg.fetch_timeout();
    let status = tokio::task::spawn_blocking({
        let url = url.clone();
        let engine = engine.clone();
        move || submit::submit_single(&CurlTransport, &engine, &url, &key, timeout)
    })
    .await??;

    println!("Submitted {} to {}: status {}", url, engine, status);
    Ok(())
}
