//! Dashboard UI - embedded HTML/CSS/JS for the aggregated feed viewer
//!
//! Serves a dark-themed single-page app at `/` with:
//! - Prediction-market table
//! - Social feed with provenance badge (live / cache / placeholder)
//! - Crypto prices with a 24h-change sparkline, refreshed by polling

use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};

/// Embedded HTML for the dashboard UI
pub const DASHBOARD_HTML: &str = include_str!("dashboard.html");

/// Serve the dashboard HTML page
pub async fn serve_dashboard() -> Response {
    (StatusCode::OK, [(header::CONTENT_TYPE, "text/html; charset=utf-8")], Html(DASHBOARD_HTML))
        .into_response()
}
