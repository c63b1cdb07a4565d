//! Service layer for pulseboard
//!
//! Centralizes the fallback cascade and feed reshaping between the HTTP
//! handlers and the upstream clients/store.

mod error;
mod market_service;
mod price_service;
mod social_service;

pub use error::ServiceError;
pub use market_service::MarketService;
pub use price_service::PriceService;
pub use social_service::SocialService;
