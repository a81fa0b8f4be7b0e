//! Dataset loading.
//!
//! A dataset is a JSON document holding an array of flat records. It is
//! read once at widget initialization and never re-read or mutated.

use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::hash::Hash;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Reads a JSON dataset from `path`.
///
/// One read, no retry, no timeout. An empty array is a valid dataset and
/// yields an index with no matches downstream, not an error. Duplicate
/// records are kept but reported.
pub fn load<T>(path: &Path) -> Result<Vec<T>, DatasetError>
where
    T: DeserializeOwned + Eq + Hash,
{
    let content = std::fs::read_to_string(path)?;
    let entries: Vec<T> = serde_json::from_str(&content)?;

    let mut seen = HashSet::new();
    for (index, entry) in entries.iter().enumerate() {
        if !seen.insert(entry) {
            tracing::warn!(index, "duplicate dataset entry");
        }
    }

    tracing::debug!(count = entries.len(), path = %path.display(), "dataset loaded");

    Ok(entries)
}
