//! Tool configuration loaded from `~/.config/indexnow/config.toml`.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Fetch timeout applied to sitemap, feed, and submission transfers when the
/// config file does not override it.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 5;

/// Global configuration. Everything has a sensible default so the tool works
/// with no config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexNowConfig {
    /// Timeout in seconds for each HTTP transfer (sitemap, feed, submission).
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
    /// Engine host used when `--engine` is not passed (e.g. "www.bing.com").
    #[serde(default)]
    pub default_engine: Option<String>,
    /// Key file used when neither `--key` nor `--key-file` is passed.
    #[serde(default)]
    pub key_file: Option<PathBuf>,
}

fn default_fetch_timeout_secs() -> u64 {
    DEFAULT_FETCH_TIMEOUT_SECS
}

impl Default for IndexNowConfig {
    fn default() -> Self {
        Self {
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            default_engine: None,
            key_file: None,
        }
    }
}

impl IndexNowConfig {
    pub fn fetch_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.fetch_timeout_secs)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("indexnow")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<IndexNowConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = IndexNowConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: IndexNowConfig = toml::from_str(&data)?;
    Ok(cfg)
}
