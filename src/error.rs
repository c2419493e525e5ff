use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while hashing, simulating or loading keys.
#[derive(Debug, Error)]
pub enum Error {
    /// A table capacity (or something used to derive one) was zero or otherwise unusable.
    #[error("invalid capacity: {0}")]
    InvalidCapacity(String),

    /// Linear probing walked the whole table without finding an empty slot.
    #[error("table full: {hash} could not place key {key:?} into a table of capacity {capacity}")]
    TableFull {
        capacity: usize,
        hash: String,
        key: String,
    },

    /// The key source held no usable lines.
    #[error("no keys found in {0}")]
    EmptyInput(String),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub fn invalid_capacity<S: Into<String>>(msg: S) -> Self {
        Error::InvalidCapacity(msg.into())
    }

    /// Attaches the hash function label to a `TableFull` raised below the simulator.
    pub(crate) fn with_hash_label(self, label: &str) -> Self {
        match self {
            Error::TableFull { capacity, key, .. } => Error::TableFull {
                capacity,
                hash: label.to_string(),
                key,
            },
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
