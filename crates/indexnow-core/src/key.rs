//! IndexNow key handling: resolution from flags/config, generation, and the
//! verification key file a site serves.

use rand::RngCore;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Resolves the submission key from exactly one source.
///
/// `--key` and `--key-file` are mutually exclusive; file contents have
/// trailing whitespace (including newlines) stripped before use. A key that
/// is empty after stripping is a configuration error, not an empty
/// submission.
pub fn resolve_key(inline: Option<&str>, key_file: Option<&Path>) -> Result<String> {
    let key = match (inline, key_file) {
        (Some(_), Some(_)) => {
            return Err(Error::KeyConfiguration(
                "pass only one of --key and --key-file".to_string(),
            ));
        }
        (Some(key), None) => key.trim().to_string(),
        (None, Some(path)) => fs::read_to_string(path)
            .map_err(|err| {
                Error::KeyConfiguration(format!("read key file {}: {}", path.display(), err))
            })?
            .trim_end()
            .to_string(),
        (None, None) => {
            return Err(Error::KeyConfiguration(
                "either --key or --key-file is required".to_string(),
            ));
        }
    };

    if key.is_empty() {
        return Err(Error::KeyConfiguration("key is empty".to_string()));
    }
    Ok(key)
}

/// Generates a fresh key: 32 lowercase hex characters, within the protocol's
/// 8-128 char `[a-zA-Z0-9-]` constraints.
pub fn generate_key() -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Writes the verification file `<key>.txt` (containing the key itself) into
/// `dir`; the site serves it at its root so the engine can verify ownership.
pub fn write_key_file(dir: &Path, key: &str) -> Result<PathBuf> {
    let path = dir.join(format!("{}.txt", key));
    fs::write(&path, key)?;
    Ok(path)
}
