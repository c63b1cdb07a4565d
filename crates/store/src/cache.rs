use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use pulseboard_core::{CACHE_CAP, StoredPost};

use crate::StoreError;

/// On-disk layout of the backing file.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CacheFile {
    tweets: Vec<StoredPost>,
    last_updated: DateTime<Utc>,
}

/// File-backed, capped, deduplicated store of social posts.
///
/// Every merge is a full read-modify-write of the backing file, serialized by
/// a single mutex so two concurrent requests cannot interleave their writes.
/// Reads are fail-soft: a missing or unparseable file is an empty store.
pub struct TweetStore {
    path: PathBuf,
    /// Serializes read-modify-write merges across concurrent requests.
    merge_lock: Mutex<()>,
}

impl std::fmt::Debug for TweetStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TweetStore").field("path", &self.path).finish_non_exhaustive()
    }
}

impl TweetStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), merge_lock: Mutex::new(()) }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads all cached posts from the backing file.
    ///
    /// A missing file is the expected empty-store case and returns silently.
    /// Any other I/O or parse failure is logged and also yields an empty
    /// store; the caller must never crash because the cache is corrupt.
    pub async fn load(&self) -> Vec<StoredPost> {
        match self.read_file().await {
            Ok(file) => file.tweets,
            Err(StoreError::Io(e)) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to read tweet cache, treating as empty");
                Vec::new()
            },
        }
    }

    /// Merges a batch of freshly fetched posts into the store.
    ///
    /// Synthetic posts are dropped from the batch before anything else — only
    /// posts obtained from a genuine live fetch are ever persisted. Batch
    /// entries overwrite same-id existing entries (newer write wins). The
    /// combined set is sorted by `created_at` descending, truncated to
    /// [`CACHE_CAP`], and written back atomically (temp file + rename).
    ///
    /// A write failure is logged, not propagated: the returned in-memory
    /// result is consistent for this request even if the on-disk copy is now
    /// stale.
    pub async fn merge(&self, new_posts: Vec<StoredPost>) -> Vec<StoredPost> {
        let _guard = self.merge_lock.lock().await;

        let existing = self.load().await;
        let mut by_id: HashMap<String, StoredPost> =
            existing.into_iter().map(|p| (p.id.clone(), p)).collect();
        for post in new_posts.into_iter().filter(|p| !p.is_synthetic) {
            by_id.insert(post.id.clone(), post);
        }

        let mut combined: Vec<StoredPost> = by_id.into_values().collect();
        combined.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        combined.truncate(CACHE_CAP);

        if let Err(e) = self.write_file(&combined).await {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to write tweet cache, serving in-memory result");
        }
        combined
    }

    /// Draws up to `count` posts from the store, uniformly at random.
    ///
    /// Returns exactly `min(count, store size)` posts. Each call shuffles
    /// independently; repeated calls may repeat posts.
    pub async fn sample(&self, count: usize) -> Vec<StoredPost> {
        let mut posts = self.load().await;
        if posts.is_empty() {
            return posts;
        }
        posts.shuffle(&mut rand::thread_rng());
        posts.truncate(count);
        posts
    }

    async fn read_file(&self) -> Result<CacheFile, StoreError> {
        let bytes = tokio::fs::read(&self.path).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Write-to-temp-then-rename so a crash mid-write leaves the previous
    /// version intact.
    async fn write_file(&self, tweets: &[StoredPost]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let file = CacheFile { tweets: tweets.to_vec(), last_updated: Utc::now() };
        let bytes = serde_json::to_vec_pretty(&file)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}
