//! One file per subcommand.

mod key_gen;
mod sitemap_fetch;
mod submit_feed;
mod submit_single;
mod submit_sitemap;
mod submit_urls;

pub use key_gen::run_key_gen;
pub use sitemap_fetch::run_sitemap_fetch;
pub use submit_feed::run_submit_feed;
pub use submit_single::run_submit_single;
pub use submit_sitemap::run_submit_sitemap;
pub use submit_urls::run_submit_urls;

/// Uniform result line for the bulk-submitting subcommands.
fn print_submission(engine: &str, count: usize, status: Option<u32>) {
    match status {
        Some(status) => println!("Submitted {} URL(s) to {}: status {}", count, engine, status),
        None => println!("No URLs to submit; skipped submission to {}", engine),
    }
}
