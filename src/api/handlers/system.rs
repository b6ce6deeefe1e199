//! System endpoints: home page, health check, fallback.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use super::home_page;
use crate::app_state::AppState;
use crate::error::ListingError;
use crate::view::Page;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
struct HealthResponse {
    status: String,
    timestamp: String,
    version: String,
}

/// `GET /` — Home page.
#[utoipa::path(
    get,
    path = "/",
    tag = "System",
    summary = "Home page",
    responses((status = 200, description = "`pages/home.html`"))
)]
pub async fn index() -> Page {
    home_page()
}

/// `GET /health` — Service health status.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Returns service health status, version, and current timestamp.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    )
)]
pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// Fallback for unmatched paths: the 404 page.
pub async fn not_found() -> ListingError {
    ListingError::PageNotFound
}

/// System routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_handler))
}
