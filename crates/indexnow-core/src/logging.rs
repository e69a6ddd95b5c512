//! Logging init: structured tracing to stderr.
//!
//! A submission tool's useful output (URL lists, statuses) goes to stdout;
//! diagnostics stay on stderr so piping `sitemap-fetch` output works.

use tracing_subscriber::EnvFilter;

/// Initialize tracing to stderr. `RUST_LOG` overrides the default filter.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,indexnow=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
