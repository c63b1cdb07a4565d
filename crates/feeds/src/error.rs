//! Typed error enum for the feeds crate.

use thiserror::Error;

/// Errors from upstream API calls.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("no bearer token configured")]
    MissingCredential,
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),
    #[error("HTTP status {code}: {body}")]
    HttpStatus { code: u16, body: String },
    #[error("JSON parse error in {context}: {source}")]
    JsonParse {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

impl FeedError {
    /// Whether this error is a rate-limit or server-side hiccup rather than
    /// a configuration problem.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::HttpRequest(_) => true,
            Self::HttpStatus { code, .. } => matches!(code, 429 | 500 | 502 | 503),
            _ => false,
        }
    }
}
