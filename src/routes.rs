//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`            - Service name and version
//! - `GET  /health`      - Health check: database round-trip
//! - `/api/v1/*`         - Golf course REST API
//! - anything else       - 404 error envelope (405 for a known path with the wrong method)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Configured origins
//! - **Rate limiting** - Per-IP token bucket (configurable for proxy deployments)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{
    fallback_handler, health_handler, method_not_allowed_handler, root_handler,
};
use crate::api::middleware::{cors, rate_limit, tracing};
use crate::config::Config;
use crate::state::AppState;
use anyhow::Result;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_governor::key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// When `config.behind_proxy` is set, rate limiting reads the client IP from
/// `X-Forwarded-For` / `X-Real-IP` instead of the peer socket address; enable
/// it only behind a trusted reverse proxy. The router must be served with
/// connect info so the peer address is available.
///
/// # Errors
///
/// Returns an error if the CORS origins or rate limit settings are invalid.
pub fn app_router(state: AppState, config: &Config) -> Result<NormalizePath<Router>> {
    let api_router = if config.behind_proxy {
        api::routes::course_routes()
            .layer(rate_limit::layer(SmartIpKeyExtractor, config.rate_limit)?)
    } else {
        api::routes::course_routes()
            .layer(rate_limit::layer(PeerIpKeyExtractor, config.rate_limit)?)
    };

    let router = Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .method_not_allowed_fallback(method_not_allowed_handler)
        .nest("/api/v1", api_router)
        .fallback(fallback_handler)
        .with_state(state)
        .layer(cors::layer(&config.allowed_origins)?)
        .layer(tracing::layer());

    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}
