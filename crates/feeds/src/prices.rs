//! Crypto-price upstream client (CoinGecko simple price API).

use std::collections::HashMap;

use serde::Deserialize;

use pulseboard_core::PricePoint;

use crate::FeedError;

/// Coin ids requested from the upstream, with their display symbols.
const COINS: &[(&str, &str)] = &[("bitcoin", "BTC"), ("ethereum", "ETH"), ("solana", "SOL")];

/// Client for the crypto-price API.
#[derive(Debug)]
pub struct PriceClient {
    client: reqwest::Client,
    base_url: String,
}

impl PriceClient {
    pub fn new(base_url: String) -> Result<Self, FeedError> {
        Ok(Self {
            client: crate::build_http_client()?,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Fetches spot prices with 24h change for the fixed coin set.
    pub async fn fetch_prices(&self) -> Result<Vec<PricePoint>, FeedError> {
        tracing::debug!("fetching spot prices from crypto upstream");
        let ids: Vec<&str> = COINS.iter().map(|(id, _)| *id).collect();
        let response = self
            .client
            .get(format!("{}/api/v3/simple/price", self.base_url))
            .query(&[
                ("ids", ids.join(",").as_str()),
                ("vs_currencies", "usd"),
                ("include_24hr_change", "true"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "<unreadable body>".to_owned());
            return Err(FeedError::HttpStatus { code: status.as_u16(), body });
        }

        let body = response.text().await?;
        let entries: HashMap<String, ApiPrice> =
            serde_json::from_str(&body).map_err(|e| FeedError::JsonParse {
                context: "price response".to_owned(),
                source: e,
            })?;
        Ok(reshape_prices(&entries))
    }
}

#[derive(Debug, Deserialize)]
struct ApiPrice {
    usd: f64,
    #[serde(default)]
    usd_24h_change: Option<f64>,
}

/// Keeps the fixed coin order regardless of upstream map ordering.
fn reshape_prices(entries: &HashMap<String, ApiPrice>) -> Vec<PricePoint> {
    COINS
        .iter()
        .filter_map(|(id, symbol)| {
            entries.get(*id).map(|e| PricePoint {
                symbol: (*symbol).to_owned(),
                usd: e.usd,
                change_24h: e.usd_24h_change.unwrap_or(0.0),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reshape_keeps_fixed_order_and_symbols() {
        let body = r#"{
            "ethereum": {"usd": 3100.2, "usd_24h_change": -0.8},
            "bitcoin": {"usd": 64000.5, "usd_24h_change": 1.9}
        }"#;
        let entries: HashMap<String, ApiPrice> = serde_json::from_str(body).unwrap();
        let prices = reshape_prices(&entries);

        assert_eq!(prices.len(), 2);
        assert_eq!(prices[0].symbol, "BTC");
        assert_eq!(prices[1].symbol, "ETH");
        assert!((prices[0].usd - 64000.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_reshape_defaults_missing_change_to_zero() {
        let body = r#"{"bitcoin": {"usd": 1.0}}"#;
        let entries: HashMap<String, ApiPrice> = serde_json::from_str(body).unwrap();
        let prices = reshape_prices(&entries);
        assert_eq!(prices[0].change_24h, 0.0);
    }
}
