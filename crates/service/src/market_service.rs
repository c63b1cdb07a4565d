use pulseboard_core::MarketSnapshot;
use pulseboard_feeds::MarketClient;

use crate::ServiceError;

/// Pass-through for the prediction-market feed.
pub struct MarketService {
    client: MarketClient,
}

impl MarketService {
    #[must_use]
    pub fn new(client: MarketClient) -> Self {
        Self { client }
    }

    pub async fn fetch_markets(&self) -> Result<Vec<MarketSnapshot>, ServiceError> {
        Ok(self.client.fetch_open_markets().await?)
    }
}
