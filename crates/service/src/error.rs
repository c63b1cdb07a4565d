//! Typed error enum for the service layer.

use pulseboard_feeds::FeedError;
use thiserror::Error;

/// Service-layer error.
///
/// Only the market and price paths can surface this: the social path always
/// degrades to cache or placeholder content instead of failing.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Upstream feed call failed.
    #[error("upstream: {0}")]
    Upstream(#[from] FeedError),
}

impl ServiceError {
    /// Whether this error is likely transient (rate limit, server hiccup).
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Upstream(e) => e.is_transient(),
        }
    }
}
