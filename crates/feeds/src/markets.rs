//! Prediction-market upstream client (Polymarket gamma API).
//!
//! The upstream encodes numbers as strings and outcome prices as a JSON
//! array *inside a string*; reshaping flattens that into plain floats.

use serde::Deserialize;

use pulseboard_core::{DEFAULT_MARKET_LIMIT, MarketSnapshot};

use crate::FeedError;

/// Client for the prediction-market API.
#[derive(Debug)]
pub struct MarketClient {
    client: reqwest::Client,
    base_url: String,
}

impl MarketClient {
    pub fn new(base_url: String) -> Result<Self, FeedError> {
        Ok(Self {
            client: crate::build_http_client()?,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Fetches the highest-volume open markets and reshapes them for display.
    pub async fn fetch_open_markets(&self) -> Result<Vec<MarketSnapshot>, FeedError> {
        tracing::debug!("fetching open markets from prediction-market upstream");
        let limit = DEFAULT_MARKET_LIMIT.to_string();
        let response = self
            .client
            .get(format!("{}/markets", self.base_url))
            .query(&[
                ("active", "true"),
                ("closed", "false"),
                ("order", "volume"),
                ("ascending", "false"),
                ("limit", limit.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "<unreadable body>".to_owned());
            return Err(FeedError::HttpStatus { code: status.as_u16(), body });
        }

        let body = response.text().await?;
        let markets: Vec<ApiMarket> =
            serde_json::from_str(&body).map_err(|e| FeedError::JsonParse {
                context: "market list response".to_owned(),
                source: e,
            })?;
        Ok(reshape_markets(markets))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiMarket {
    question: Option<String>,
    /// JSON array of decimal strings, itself wrapped in a string.
    outcome_prices: Option<String>,
    volume: Option<String>,
    end_date: Option<String>,
}

fn reshape_markets(markets: Vec<ApiMarket>) -> Vec<MarketSnapshot> {
    markets
        .into_iter()
        .filter_map(|m| {
            let question = m.question?;
            Some(MarketSnapshot {
                question,
                probability: first_outcome_price(m.outcome_prices.as_deref()),
                volume: m.volume.as_deref().and_then(|v| v.parse().ok()).unwrap_or(0.0),
                end_date: m.end_date,
            })
        })
        .collect()
}

/// Extracts the first outcome price from the doubly-encoded upstream field.
/// Anything unparseable becomes 0.0 rather than dropping the market.
fn first_outcome_price(raw: Option<&str>) -> f64 {
    raw.and_then(|s| serde_json::from_str::<Vec<String>>(s).ok())
        .and_then(|prices| prices.first().and_then(|p| p.parse().ok()))
        .unwrap_or(0.0)
}
