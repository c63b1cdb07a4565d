//! HTTP proxy layer for pulseboard.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]

pub mod api_error;
mod handlers;
mod viewer;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

use pulseboard_service::{MarketService, PriceService, SocialService};

/// Shared application state for all HTTP handlers.
///
/// Wrapped in `Arc` for thread-safe sharing across handlers.
pub struct AppState {
    /// The live/cache/placeholder cascade for social content.
    pub social_service: Arc<SocialService>,
    /// Prediction-market pass-through.
    pub market_service: Arc<MarketService>,
    /// Crypto-price pass-through.
    pub price_service: Arc<PriceService>,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    // The dashboard is served same-origin, but the API stays open for other
    // front ends, matching the original proxy's permissive CORS headers.
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new()
        .route("/", get(viewer::serve_dashboard))
        .route("/health", get(health))
        .route("/api/tweets", get(handlers::get_tweets))
        .route("/api/markets", get(handlers::get_markets))
        .route("/api/prices", get(handlers::get_prices))
        .layer(cors)
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
