use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use pulseboard_core::{MarketSnapshot, PricePoint, SocialFeed};

use crate::api_error::ApiError;
use crate::AppState;

/// Social content with fallback. This route never fails: the cascade always
/// terminates with live, cached, or placeholder posts.
pub async fn get_tweets(State(state): State<Arc<AppState>>) -> Json<SocialFeed> {
    Json(state.social_service.fetch_posts().await)
}

pub async fn get_markets(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<MarketSnapshot>>, ApiError> {
    state.market_service.fetch_markets().await.map(Json).map_err(|e| {
        tracing::warn!(error = %e, "market feed request failed");
        e.into()
    })
}

pub async fn get_prices(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PricePoint>>, ApiError> {
    state.price_service.fetch_prices().await.map(Json).map_err(|e| {
        tracing::warn!(error = %e, "price feed request failed");
        e.into()
    })
}
