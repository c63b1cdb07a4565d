use serde::{Deserialize, Serialize};

/// Spot price for one coin, reshaped from the upstream payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePoint {
    /// Ticker symbol, e.g. "BTC".
    pub symbol: String,
    /// Current price in USD.
    pub usd: f64,
    /// Percentage change over the last 24 hours.
    pub change_24h: f64,
}
