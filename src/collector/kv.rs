//! Reader for line-oriented `key<separator>value` files.
//!
//! Used for `/etc/os-release` (`KEY=value`) and `/proc/cpuinfo`
//! (`key : value`). Only the wanted keys are kept; everything else is skipped.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::collector::traits::FileSystem;

/// Error type for key-value file reads.
#[derive(Debug, Error)]
pub enum KvError {
    /// The file could not be opened or read.
    #[error("cannot read {}: {source}", .path.display())]
    FileUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Reads `path` and returns the wanted keys that were found, with trimmed values.
///
/// Missing keys are not an error: the caller gets whatever subset was present
/// and decides its own fallback. Bytes that are not valid UTF-8 are replaced,
/// so a stray Latin-1 line never hides the other keys.
pub fn read_key_values(
    fs: &impl FileSystem,
    path: &Path,
    separator: &str,
    keys: &[&str],
) -> Result<HashMap<String, String>, KvError> {
    let content = fs.read(path).map_err(|source| KvError::FileUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_key_values(&String::from_utf8_lossy(&content), separator, keys))
}

/// Parses `key<separator>value` lines.
///
/// A line is split at the first occurrence of `separator`; lines without it
/// are ignored. When a key appears more than once the last value wins.
pub fn parse_key_values(content: &str, separator: &str, keys: &[&str]) -> HashMap<String, String> {
    let mut values = HashMap::new();

    for line in content.lines() {
        let Some((key, value)) = line.split_once(separator) else {
            continue;
        };
        let key = key.trim();
        if keys.contains(&key) {
            values.insert(key.to_string(), value.trim().to_string());
        }
    }

    values
}
