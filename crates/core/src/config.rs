//! Process configuration, built once at startup and passed down explicitly.
//!
//! There is deliberately no lazily-initialized global for the bearer token or
//! anything else: every component that needs configuration receives it at
//! construction time.

use std::path::PathBuf;

use crate::constants::DEFAULT_SEARCH_QUERY;

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    match std::env::var(var) {
        Ok(v) => match v.parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        Err(_) => default,
    }
}

fn env_string_with_default(var: &str, default: &str) -> String {
    std::env::var(var).ok().filter(|v| !v.is_empty()).unwrap_or_else(|| default.to_owned())
}

/// All runtime configuration for the proxy.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bearer token for the social-search upstream. `None` when the env var
    /// is unset or empty; the fallback cascade then skips the live fetch.
    pub social_bearer_token: Option<String>,
    /// Search phrase sent to the social-search upstream.
    pub search_query: String,
    /// Path of the file-backed tweet cache.
    pub cache_path: PathBuf,
    /// Bind host for the HTTP server.
    pub host: String,
    /// Bind port for the HTTP server.
    pub port: u16,
    /// Base URL of the social-search upstream.
    pub social_api_url: String,
    /// Base URL of the prediction-market upstream.
    pub market_api_url: String,
    /// Base URL of the crypto-price upstream.
    pub price_api_url: String,
}

impl Config {
    /// Reads configuration from the environment, falling back to defaults
    /// for everything except the bearer token (which has no default).
    pub fn from_env() -> Self {
        let social_bearer_token =
            std::env::var("PULSEBOARD_BEARER_TOKEN").ok().filter(|t| !t.trim().is_empty());
        if social_bearer_token.is_none() {
            tracing::warn!("PULSEBOARD_BEARER_TOKEN not set; social feed will serve from cache");
        }
        Self {
            social_bearer_token,
            search_query: env_string_with_default("PULSEBOARD_SEARCH_QUERY", DEFAULT_SEARCH_QUERY),
            cache_path: std::env::var("PULSEBOARD_CACHE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_cache_path()),
            host: env_string_with_default("PULSEBOARD_HOST", "127.0.0.1"),
            port: env_parse_with_default("PULSEBOARD_PORT", 8787),
            social_api_url: env_string_with_default(
                "PULSEBOARD_SOCIAL_API_URL",
                "https://api.twitter.com",
            ),
            market_api_url: env_string_with_default(
                "PULSEBOARD_MARKET_API_URL",
                "https://gamma-api.polymarket.com",
            ),
            price_api_url: env_string_with_default(
                "PULSEBOARD_PRICE_API_URL",
                "https://api.coingecko.com",
            ),
        }
    }
}

fn default_cache_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pulseboard")
        .join("tweet-cache.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_parse_valid_value() {
        let var_name = "TEST_PB_ENV_PARSE_VALID_55101";
        unsafe { std::env::set_var(var_name, "42") };
        let result: u16 = env_parse_with_default(var_name, 10);
        assert_eq!(result, 42);
        unsafe { std::env::remove_var(var_name) };
    }

    #[test]
    fn test_env_parse_invalid_value() {
        let var_name = "TEST_PB_ENV_PARSE_INVALID_55102";
        unsafe { std::env::set_var(var_name, "banana") };
        let result: u16 = env_parse_with_default(var_name, 10);
        assert_eq!(result, 10);
        unsafe { std::env::remove_var(var_name) };
    }

    #[test]
    fn test_env_parse_missing_var() {
        let var_name = "TEST_PB_ENV_PARSE_MISSING_55103";
        unsafe { std::env::remove_var(var_name) };
        let result: u16 = env_parse_with_default(var_name, 10);
        assert_eq!(result, 10);
    }

    #[test]
    fn test_env_string_empty_falls_back() {
        let var_name = "TEST_PB_ENV_STRING_EMPTY_55104";
        unsafe { std::env::set_var(var_name, "") };
        assert_eq!(env_string_with_default(var_name, "dflt"), "dflt");
        unsafe { std::env::remove_var(var_name) };
    }
}
