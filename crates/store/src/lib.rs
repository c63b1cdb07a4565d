//! File-backed tweet cache for pulseboard
//!
//! A single flat JSON file acts as a capped, deduplicated key-value store for
//! previously seen social posts. The store is fail-soft on the read side: a
//! missing or corrupt file is treated as an empty store and recovered by the
//! next merge's write.

mod cache;
mod error;

pub use cache::TweetStore;
pub use error::StoreError;
