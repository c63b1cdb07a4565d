//! Shared constants for pulseboard.
//!
//! Centralizes magic numbers that would otherwise be duplicated across crates.

/// Maximum number of posts retained in the file-backed tweet cache.
pub const CACHE_CAP: usize = 100;

/// Number of cached posts drawn for display when the live feed is down.
pub const SAMPLE_COUNT: usize = 10;

/// Default search phrase sent to the social-search upstream.
pub const DEFAULT_SEARCH_QUERY: &str = "prediction markets -is:retweet lang:en";

/// Timeout for any single upstream HTTP request, in seconds.
pub const UPSTREAM_TIMEOUT_SECS: u64 = 10;

/// Default number of prediction markets fetched per refresh.
pub const DEFAULT_MARKET_LIMIT: usize = 12;
