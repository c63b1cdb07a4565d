use pulseboard_core::PricePoint;
use pulseboard_feeds::PriceClient;

use crate::ServiceError;

/// Pass-through for the crypto-price feed.
pub struct PriceService {
    client: PriceClient,
}

impl PriceService {
    #[must_use]
    pub fn new(client: PriceClient) -> Self {
        Self { client }
    }

    pub async fn fetch_prices(&self) -> Result<Vec<PricePoint>, ServiceError> {
        Ok(self.client.fetch_prices().await?)
    }
}
