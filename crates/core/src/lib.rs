//! Core types and configuration for pulseboard
//!
//! This crate contains domain types shared across all other crates.

mod config;
mod constants;
mod market;
mod post;
mod price;

pub use config::*;
pub use constants::*;
pub use market::*;
pub use post::*;
pub use price::*;
