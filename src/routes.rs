//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health` - Storage health check
//! - `/api/*`      - Camps, talks and speakers
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::extract::Request;
use axum::routing::{IntoMakeService, get};
use axum::{Router, ServiceExt};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Routes and middleware without path normalization.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// The application service: [`build_router`] with trailing slashes trimmed
/// before routing, so `/api/camps/` reaches `/api/camps`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state))
}

/// [`app_router`] as the make-service handed to `axum::serve`.
pub fn app_service(state: AppState) -> IntoMakeService<NormalizePath<Router>> {
    ServiceExt::<Request>::into_make_service(app_router(state))
}
