//! Key list loading.
//!
//! A key file holds one name per line. Lines are trimmed and blank lines skipped;
//! order and duplicates are kept exactly as they appear.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};

/// Reads keys from any buffered reader.
pub fn parse_keys<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut keys = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            keys.push(trimmed.to_string());
        }
    }
    Ok(keys)
}

/// Reads keys from the file at `path`.
///
/// # Errors
/// - `Io` if the file cannot be opened or read.
/// - `EmptyInput` if it holds no non-blank lines.
pub fn read_keys<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_err)?;
    let keys = parse_keys(BufReader::new(file)).map_err(io_err)?;
    if keys.is_empty() {
        return Err(Error::EmptyInput(path.display().to_string()));
    }
    debug!("read {} keys from {}", keys.len(), path.display());
    Ok(keys)
}
