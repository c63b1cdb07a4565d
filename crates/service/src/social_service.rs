use std::sync::Arc;

use pulseboard_core::{placeholder_posts, Provenance, SocialFeed, SAMPLE_COUNT};
use pulseboard_feeds::SocialSource;
use pulseboard_store::TweetStore;

/// The live → cache → placeholder cascade for social content.
///
/// Each inbound request runs the cascade once: one live attempt, then a
/// random sample of the cache, then the fixed synthetic set. By construction
/// the cascade always terminates with content, so this service is the one
/// path in the system that cannot return an error.
pub struct SocialService {
    source: Arc<dyn SocialSource>,
    store: Arc<TweetStore>,
    search_query: String,
}

impl SocialService {
    pub fn new(source: Arc<dyn SocialSource>, store: Arc<TweetStore>, search_query: String) -> Self {
        Self { source, store, search_query }
    }

    /// Fetches social content, annotated with its provenance.
    pub async fn fetch_posts(&self) -> SocialFeed {
        match self.source.search_recent(&self.search_query).await {
            Ok(posts) if !posts.is_empty() => {
                // Persist the batch; the caller gets the freshly fetched
                // posts, not the whole capped store.
                self.store.merge(posts.clone()).await;
                SocialFeed { posts, source: Provenance::Live }
            },
            Ok(_) => {
                tracing::debug!("live social fetch returned no posts, falling back to cache");
                self.from_cache().await
            },
            Err(e) => {
                tracing::warn!(error = %e, "live social fetch failed, falling back to cache");
                self.from_cache().await
            },
        }
    }

    async fn from_cache(&self) -> SocialFeed {
        let sampled = self.store.sample(SAMPLE_COUNT).await;
        if sampled.is_empty() {
            SocialFeed { posts: placeholder_posts(), source: Provenance::Placeholder }
        } else {
            SocialFeed { posts: sampled, source: Provenance::Cache }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use chrono::{Duration, Utc};
    use pulseboard_core::{PostAuthor, PostMetrics, StoredPost};
    use pulseboard_feeds::FeedError;
    use tempfile::TempDir;

    struct FixedSource(Vec<StoredPost>);

    #[async_trait]
    impl SocialSource for FixedSource {
        async fn search_recent(&self, _query: &str) -> Result<Vec<StoredPost>, FeedError> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl SocialSource for FailingSource {
        async fn search_recent(&self, _query: &str) -> Result<Vec<StoredPost>, FeedError> {
            Err(FeedError::HttpStatus { code: 429, body: "rate limited".to_string() })
        }
    }

    fn create_test_post(id: &str, minutes_ago: i64) -> StoredPost {
        StoredPost {
            id: id.to_string(),
            text: format!("Test post {}", id),
            created_at: Utc::now() - Duration::minutes(minutes_ago),
            author_id: format!("author-{}", id),
            author: PostAuthor {
                username: format!("user_{}", id),
                name: format!("User {}", id),
                profile_image_url: None,
            },
            metrics: PostMetrics::default(),
            is_synthetic: false,
        }
    }

    fn create_store() -> (Arc<TweetStore>, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = Arc::new(TweetStore::new(temp_dir.path().join("cache.json")));
        (store, temp_dir)
    }

    fn service(source: impl SocialSource + 'static, store: Arc<TweetStore>) -> SocialService {
        SocialService::new(Arc::new(source), store, "test query".to_string())
    }

    #[tokio::test]
    async fn test_live_success_returns_live_and_persists() {
        let (store, _temp_dir) = create_store();
        let batch = vec![create_test_post("p1", 1), create_test_post("p2", 2)];
        let svc = service(FixedSource(batch), Arc::clone(&store));

        let feed = svc.fetch_posts().await;

        assert_eq!(feed.source, Provenance::Live);
        assert_eq!(feed.posts.len(), 2);
        assert_eq!(store.load().await.len(), 2);
    }

    #[tokio::test]
    async fn test_live_failure_serves_entire_small_cache() {
        let (store, _temp_dir) = create_store();
        store
            .merge(vec![
                create_test_post("p1", 1),
                create_test_post("p2", 2),
                create_test_post("p3", 3),
            ])
            .await;
        let svc = service(FailingSource, Arc::clone(&store));

        let feed = svc.fetch_posts().await;

        assert_eq!(feed.source, Provenance::Cache);
        assert_eq!(feed.posts.len(), 3);
    }

    #[tokio::test]
    async fn test_live_failure_empty_store_serves_placeholders() {
        let (store, _temp_dir) = create_store();
        let svc = service(FailingSource, store);

        let feed = svc.fetch_posts().await;

        assert_eq!(feed.source, Provenance::Placeholder);
        assert!(!feed.posts.is_empty());
        assert!(feed.posts.iter().all(|p| p.is_synthetic));
    }

    #[tokio::test]
    async fn test_empty_live_result_falls_back_to_cache() {
        let (store, _temp_dir) = create_store();
        store.merge(vec![create_test_post("p1", 1)]).await;
        let svc = service(FixedSource(Vec::new()), Arc::clone(&store));

        let feed = svc.fetch_posts().await;

        assert_eq!(feed.source, Provenance::Cache);
        assert_eq!(feed.posts.len(), 1);
    }

    #[tokio::test]
    async fn test_cache_sample_is_capped_at_display_count() {
        let (store, _temp_dir) = create_store();
        let batch: Vec<_> =
            (0..30).map(|i| create_test_post(&format!("p{}", i), i as i64)).collect();
        store.merge(batch).await;
        let svc = service(FailingSource, store);

        let feed = svc.fetch_posts().await;

        assert_eq!(feed.source, Provenance::Cache);
        assert_eq!(feed.posts.len(), SAMPLE_COUNT);
    }

    #[tokio::test]
    async fn test_placeholders_are_never_persisted_by_later_success() {
        let (store, _temp_dir) = create_store();
        // First request: everything empty, placeholders served.
        let svc = service(FailingSource, Arc::clone(&store));
        let feed = svc.fetch_posts().await;
        assert_eq!(feed.source, Provenance::Placeholder);

        // A later live success must persist only the real batch.
        let svc = service(FixedSource(vec![create_test_post("real", 1)]), Arc::clone(&store));
        let feed = svc.fetch_posts().await;
        assert_eq!(feed.source, Provenance::Live);

        let stored = store.load().await;
        assert_eq!(stored.len(), 1);
        assert!(stored.iter().all(|p| !p.is_synthetic));
    }
}
