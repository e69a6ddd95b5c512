//! `indexnow key-gen` – generate a key and its verification file.

use anyhow::Result;
use indexnow_core::key;
use std::path::Path;

pub fn run_key_gen(dir: Option<&Path>) -> Result<()> {
    let dir = dir.unwrap_or_else(|| Path::new("."));
    let generated = key::generate_key();
    let path = key::write_key_file(dir, &generated)?;
    println!("Generated key {}", generated);
    println!("Wrote verification file {}", path.display());
    println!("Serve it at https://<your-host>/{}.txt", generated);
    Ok(())
}
