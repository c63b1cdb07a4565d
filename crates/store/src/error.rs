//! Typed error enum for the store crate.

use thiserror::Error;

/// Errors from reading or writing the backing cache file.
///
/// These never escape the store's public API: reads recover to an empty
/// store and write failures are logged while the in-memory result is still
/// returned. The type exists so internal helpers can use `?` and so log
/// lines carry a precise failure mode.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cache file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("cache file is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}
