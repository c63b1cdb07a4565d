use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Where a batch of returned posts came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Fetched from the upstream social-search API during this request.
    Live,
    /// Sampled from the file-backed cache after a failed live fetch.
    Cache,
    /// Fixed synthetic content; both the live fetch and the cache came up empty.
    Placeholder,
}

impl Provenance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Cache => "cache",
            Self::Placeholder => "placeholder",
        }
    }
}

/// Denormalized author display info, embedded in each post so display
/// survives even if a later author lookup fails.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PostAuthor {
    pub username: String,
    pub name: String,
    #[serde(default)]
    pub profile_image_url: Option<String>,
}

impl PostAuthor {
    /// Fallback author for posts whose author record was missing from the
    /// upstream expansion.
    pub fn unknown() -> Self {
        Self { username: "unknown".to_owned(), name: "Unknown".to_owned(), profile_image_url: None }
    }
}

/// Engagement counters. Informational only; no invariant is enforced on them.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PostMetrics {
    pub reply_count: u64,
    pub share_count: u64,
    pub like_count: u64,
    pub quote_count: u64,
}

/// One retained social-media post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredPost {
    /// Opaque unique identifier, stable across fetches. Primary key.
    pub id: String,
    /// Display body.
    pub text: String,
    /// Recency ordering key.
    pub created_at: DateTime<Utc>,
    /// Opaque identifier into the author mapping.
    pub author_id: String,
    /// Embedded author display info.
    pub author: PostAuthor,
    #[serde(default)]
    pub metrics: PostMetrics,
    /// Marks placeholder/sample content that never came from a live fetch.
    /// Synthetic posts are never written back into the cache.
    #[serde(default)]
    pub is_synthetic: bool,
}

/// A batch of posts annotated with where they came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialFeed {
    pub posts: Vec<StoredPost>,
    pub source: Provenance,
}

/// Fixed synthetic posts returned when both the live fetch and the cache
/// come up empty. Always available, so the social path never hard-fails.
pub fn placeholder_posts() -> Vec<StoredPost> {
    let now = Utc::now();
    let sample = |n: i64, username: &str, name: &str, text: &str| StoredPost {
        id: format!("sample-{n}"),
        text: text.to_owned(),
        created_at: now - Duration::minutes(n * 17),
        author_id: format!("sample-author-{n}"),
        author: PostAuthor {
            username: username.to_owned(),
            name: name.to_owned(),
            profile_image_url: None,
        },
        metrics: PostMetrics::default(),
        is_synthetic: true,
    };
    vec![
        sample(
            1,
            "marketwatcher",
            "Market Watcher",
            "Prediction markets are pricing in a volatile week. Keep an eye on the election contracts. (sample post)",
        ),
        sample(
            2,
            "cryptodaily",
            "Crypto Daily",
            "BTC holding steady while prediction market volume climbs. (sample post)",
        ),
        sample(
            3,
            "forecastfan",
            "Forecast Fan",
            "Interesting divergence between polls and prediction market odds today. (sample post)",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provenance_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Provenance::Live).unwrap(), "\"live\"");
        assert_eq!(serde_json::to_string(&Provenance::Placeholder).unwrap(), "\"placeholder\"");
    }

    #[test]
    fn test_stored_post_wire_format_is_camel_case() {
        let post = placeholder_posts().remove(0);
        let json = serde_json::to_value(&post).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("authorId").is_some());
        assert_eq!(json.get("isSynthetic").unwrap(), &serde_json::Value::Bool(true));
    }

    #[test]
    fn test_placeholder_posts_are_all_synthetic_with_distinct_ids() {
        let posts = placeholder_posts();
        assert!(!posts.is_empty());
        assert!(posts.iter().all(|p| p.is_synthetic));
        let mut ids: Vec<_> = posts.iter().map(|p| p.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), posts.len());
    }
}
