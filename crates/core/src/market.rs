use serde::{Deserialize, Serialize};

/// One prediction market, reshaped from the upstream payload for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSnapshot {
    /// Market question, e.g. "Will X happen by March?".
    pub question: String,
    /// Implied probability of the first outcome, in 0..=1.
    pub probability: f64,
    /// Lifetime traded volume in USD.
    pub volume: f64,
    /// Resolution date, as reported by the upstream (ISO-8601).
    #[serde(default)]
    pub end_date: Option<String>,
}
