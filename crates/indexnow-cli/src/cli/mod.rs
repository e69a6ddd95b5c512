//! CLI for the indexnow submission tool.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use indexnow_core::config::{self, IndexNowConfig};
use indexnow_core::error::Error;
use indexnow_core::key;
use std::path::PathBuf;

use commands::{
    run_key_gen, run_sitemap_fetch, run_submit_feed, run_submit_single, run_submit_sitemap,
    run_submit_urls,
};

/// Top-level CLI for IndexNow submission.
#[derive(Debug, Parser)]
#[command(name = "indexnow")]
#[command(about = "Submit website URLs to search engines via IndexNow", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Key source flags, shared by every submitting subcommand. Exactly one of
/// the two may be given; with neither, the config's `key_file` is used.
#[derive(Debug, Args)]
pub struct KeyArgs {
    /// IndexNow key.
    #[arg(short = 'k', long)]
    pub key: Option<String>,

    /// File containing the key (trailing newline stripped).
    #[arg(short = 'f', long, value_name = "FILE")]
    pub key_file: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch the URLs in a sitemap and write them to a file, one per line.
    SitemapFetch {
        /// Sitemap URL to fetch.
        url: String,

        /// Output file.
        #[arg(short = 'o', long, value_name = "FILE")]
        output: PathBuf,

        /// Only keep entries modified within this ISO-8601 duration (e.g. P10D).
        #[arg(long, value_name = "DURATION")]
        max_age: Option<String>,
    },

    /// Submit a single URL to a search engine.
    SubmitSingle {
        /// The page URL to submit.
        url: String,

        /// Search engine host (e.g. www.bing.com).
        #[arg(short = 'e', long)]
        engine: Option<String>,

        #[command(flatten)]
        key: KeyArgs,
    },

    /// Submit a file of URLs (one per line) to a search engine.
    SubmitUrls {
        /// File containing the URLs, one per line.
        url_file: PathBuf,

        /// Search engine host (e.g. www.bing.com).
        #[arg(short = 'e', long)]
        engine: Option<String>,

        /// Your website host (e.g. www.example.com).
        #[arg(short = 'H', long)]
        host: String,

        /// URL where the engine can fetch the key file, if not at the site root.
        #[arg(long, value_name = "URL")]
        key_location: Option<String>,

        #[command(flatten)]
        key: KeyArgs,
    },

    /// Parse an RSS/Atom feed and submit its item URLs.
    SubmitFromFeed {
        /// Feed URL (http(s)://, file://, or a local path).
        feed_url: String,

        /// Search engine host (e.g. www.bing.com).
        #[arg(short = 'e', long)]
        engine: Option<String>,

        /// Your website host (e.g. www.example.com).
        #[arg(short = 'H', long)]
        host: String,

        /// Only submit items published within this ISO-8601 duration.
        #[arg(long, value_name = "DURATION")]
        max_age: Option<String>,

        /// URL where the engine can fetch the key file, if not at the site root.
        #[arg(long, value_name = "URL")]
        key_location: Option<String>,

        #[command(flatten)]
        key: KeyArgs,
    },

    /// Fetch a sitemap and submit its URLs in one step.
    SubmitFromSitemap {
        /// Sitemap URL to fetch.
        url: String,

        /// Search engine host (e.g. www.bing.com).
        #[arg(short = 'e', long)]
        engine: Option<String>,

        /// Your website host (e.g. www.example.com).
        #[arg(short = 'H', long)]
        host: String,

        /// Only submit entries modified within this ISO-8601 duration.
        #[arg(long, value_name = "DURATION")]
        max_age: Option<String>,

        /// URL where the engine can fetch the key file, if not at the site root.
        #[arg(long, value_name = "URL")]
        key_location: Option<String>,

        #[command(flatten)]
        key: KeyArgs,
    },

    /// Generate a fresh IndexNow key and write its verification file.
    KeyGen {
        /// Directory to write `<key>.txt` into (default: current directory).
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::SitemapFetch {
                url,
                output,
                max_age,
            } => run_sitemap_fetch(&cfg, url, &output, max_age).await?,
            CliCommand::SubmitSingle { url, engine, key } => {
                let engine = resolve_engine(engine, &cfg)?;
                let key = resolve_key(&key, &cfg)?;
                run_submit_single(&cfg, url, engine, key).await?;
            }
            CliCommand::SubmitUrls {
                url_file,
                engine,
                host,
                key_location,
                key,
            } => {
                let engine = resolve_engine(engine, &cfg)?;
                let key = resolve_key(&key, &cfg)?;
                run_submit_urls(&cfg, &url_file, engine, host, key, key_location).await?;
            }
            CliCommand::SubmitFromFeed {
                feed_url,
                engine,
                host,
                max_age,
                key_location,
                key,
            } => {
                let engine = resolve_engine(engine, &cfg)?;
                let key = resolve_key(&key, &cfg)?;
                run_submit_feed(&cfg, feed_url, engine, host, key, max_age, key_location).await?;
            }
            CliCommand::SubmitFromSitemap {
                url,
                engine,
                host,
                max_age,
                key_location,
                key,
            } => {
                let engine = resolve_engine(engine, &cfg)?;
                let key = resolve_key(&key, &cfg)?;
                run_submit_sitemap(&cfg, url, engine, host, key, max_age, key_location).await?;
            }
            CliCommand::KeyGen { dir } => run_key_gen(dir.as_deref())?,
        }

        Ok(())
    }
}

/// Engine host from the flag, falling back to the config's default.
fn resolve_engine(flag: Option<String>, cfg: &IndexNowConfig) -> Result<String, Error> {
    flag.or_else(|| cfg.default_engine.clone())
        .ok_or(Error::MissingEngine)
}

/// Key from the flags, falling back to the config's key file when neither
/// flag is given.
fn resolve_key(args: &KeyArgs, cfg: &IndexNowConfig) -> Result<String, Error> {
    if args.key.is_none() && args.key_file.is_none() {
        if let Some(path) = &cfg.key_file {
            return key::resolve_key(None, Some(path));
        }
    }
    key::resolve_key(args.key.as_deref(), args.key_file.as_deref())
}

#[cfg(test)]
mod tests;
