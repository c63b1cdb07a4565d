//! Social-search upstream client (Twitter API v2 recent search).
//!
//! Authors arrive in a separate `includes.users` expansion; they are joined
//! into each post here so the stored shape is self-contained.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use pulseboard_core::{PostAuthor, PostMetrics, StoredPost};

use crate::FeedError;

/// Seam between the fallback coordinator and the live upstream.
///
/// Production uses [`SocialClient`]; tests substitute fakes.
#[async_trait]
pub trait SocialSource: Send + Sync {
    /// One live search attempt. No retries, no credential renegotiation.
    async fn search_recent(&self, query: &str) -> Result<Vec<StoredPost>, FeedError>;
}

/// Client for the social-search API.
pub struct SocialClient {
    client: reqwest::Client,
    bearer_token: Option<String>,
    base_url: String,
}

impl std::fmt::Debug for SocialClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SocialClient")
            .field("bearer_token", &self.bearer_token.as_ref().map(|_| "***"))
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl SocialClient {
    /// Creates a new client. `bearer_token = None` makes every call fail
    /// with [`FeedError::MissingCredential`] before any network I/O, which
    /// feeds the coordinator's cache cascade.
    pub fn new(bearer_token: Option<String>, base_url: String) -> Result<Self, FeedError> {
        Ok(Self {
            client: crate::build_http_client()?,
            bearer_token,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }
}

#[async_trait]
impl SocialSource for SocialClient {
    async fn search_recent(&self, query: &str) -> Result<Vec<StoredPost>, FeedError> {
        let token = self.bearer_token.as_deref().ok_or(FeedError::MissingCredential)?;

        tracing::debug!(query, "fetching recent posts from social upstream");
        let response = self
            .client
            .get(format!("{}/2/tweets/search/recent", self.base_url))
            .bearer_auth(token)
            .query(&[
                ("query", query),
                ("max_results", "25"),
                ("tweet.fields", "created_at,public_metrics,author_id"),
                ("expansions", "author_id"),
                ("user.fields", "username,name,profile_image_url"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "<unreadable body>".to_owned());
            return Err(FeedError::HttpStatus { code: status.as_u16(), body });
        }

        let body = response.text().await?;
        let parsed: SearchResponse =
            serde_json::from_str(&body).map_err(|e| FeedError::JsonParse {
                context: "social search response".to_owned(),
                source: e,
            })?;
        Ok(map_search_response(parsed))
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<ApiTweet>,
    #[serde(default)]
    includes: Includes,
}

#[derive(Debug, Default, Deserialize)]
struct Includes {
    #[serde(default)]
    users: Vec<ApiUser>,
}

#[derive(Debug, Deserialize)]
struct ApiTweet {
    id: String,
    text: String,
    created_at: DateTime<Utc>,
    author_id: String,
    #[serde(default)]
    public_metrics: ApiMetrics,
}

#[derive(Debug, Default, Deserialize)]
struct ApiMetrics {
    #[serde(default)]
    reply_count: u64,
    #[serde(default)]
    retweet_count: u64,
    #[serde(default)]
    like_count: u64,
    #[serde(default)]
    quote_count: u64,
}

#[derive(Debug, Deserialize)]
struct ApiUser {
    id: String,
    username: String,
    name: String,
    #[serde(default)]
    profile_image_url: Option<String>,
}

/// Joins the author expansion into each post and maps to the stored shape.
/// Everything mapped here is live content, so `is_synthetic` is false.
fn map_search_response(response: SearchResponse) -> Vec<StoredPost> {
    let users = response.includes.users;
    response
        .data
        .into_iter()
        .map(|tweet| {
            let author = users
                .iter()
                .find(|u| u.id == tweet.author_id)
                .map(|u| PostAuthor {
                    username: u.username.clone(),
                    name: u.name.clone(),
                    profile_image_url: u.profile_image_url.clone(),
                })
                .unwrap_or_else(PostAuthor::unknown);
            StoredPost {
                id: tweet.id,
                text: tweet.text,
                created_at: tweet.created_at,
                author_id: tweet.author_id,
                author,
                metrics: PostMetrics {
                    reply_count: tweet.public_metrics.reply_count,
                    share_count: tweet.public_metrics.retweet_count,
                    like_count: tweet.public_metrics.like_count,
                    quote_count: tweet.public_metrics.quote_count,
                },
                is_synthetic: false,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_BODY: &str = r#"{
        "data": [
            {
                "id": "100",
                "text": "first tweet",
                "created_at": "2026-08-20T10:00:00Z",
                "author_id": "u1",
                "public_metrics": {"reply_count": 1, "retweet_count": 2, "like_count": 3, "quote_count": 4}
            },
            {
                "id": "101",
                "text": "orphan author",
                "created_at": "2026-08-20T11:00:00Z",
                "author_id": "u9"
            }
        ],
        "includes": {
            "users": [
                {"id": "u1", "username": "alice", "name": "Alice", "profile_image_url": "https://img/a.png"}
            ]
        }
    }"#;

    #[test]
    fn test_map_joins_authors_and_tags_non_synthetic() {
        let parsed: SearchResponse = serde_json::from_str(SAMPLE_BODY).unwrap();
        let posts = map_search_response(parsed);

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].author.username, "alice");
        assert_eq!(posts[0].metrics.share_count, 2);
        assert!(!posts[0].is_synthetic);
        // Missing author record falls back instead of dropping the post.
        assert_eq!(posts[1].author.username, "unknown");
    }

    #[test]
    fn test_empty_search_response_maps_to_empty_batch() {
        let parsed: SearchResponse = serde_json::from_str(r#"{"meta":{"result_count":0}}"#).unwrap();
        assert!(map_search_response(parsed).is_empty());
    }

    #[tokio::test]
    async fn test_missing_credential_short_circuits() {
        let client = SocialClient::new(None, "https://example.invalid".to_owned()).unwrap();
        let err = client.search_recent("anything").await.unwrap_err();
        assert!(matches!(err, FeedError::MissingCredential));
    }
}
