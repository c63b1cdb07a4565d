//! Upstream API clients for pulseboard
//!
//! Thin reqwest wrappers around the three public feeds the dashboard
//! aggregates. Each client makes exactly one attempt per call; retry and
//! fallback policy live in the service layer, not here.

mod error;
mod markets;
mod prices;
mod social;

pub use error::FeedError;
pub use markets::MarketClient;
pub use prices::PriceClient;
pub use social::{SocialClient, SocialSource};

use std::time::Duration;

use pulseboard_core::UPSTREAM_TIMEOUT_SECS;

/// Builds the shared reqwest client with the upstream timeout applied.
pub(crate) fn build_http_client() -> Result<reqwest::Client, FeedError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(UPSTREAM_TIMEOUT_SECS))
        .build()
        .map_err(|e| FeedError::ClientInit(e.to_string()))
}
