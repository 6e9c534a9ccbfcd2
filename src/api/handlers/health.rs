//! Handlers for the health check, service info and unmatched requests.

use axum::{Json, extract::State, http::StatusCode};
use serde_json::json;

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse, ServiceInfo};
use crate::error::AppError;
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Database reachable
/// - **503 Service Unavailable**: Database unreachable
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "healthy" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let db_check = match state.golf_course_service.check_database().await {
        Ok(()) => CheckStatus::healthy(),
        Err(e) => {
            tracing::warn!(error = %e, "Health check: database unreachable");
            CheckStatus::unhealthy("Database connection failed")
        }
    };

    let all_healthy = db_check.is_healthy();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { database: db_check },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Service name and version.
///
/// # Endpoint
///
/// `GET /`
pub async fn root_handler() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        docs: "/api/v1/golf-courses",
    })
}

/// Envelope for requests that match no route.
pub async fn fallback_handler() -> AppError {
    AppError::not_found("Route not found", json!({}))
}

/// Envelope for a known path requested with an unsupported method.
pub async fn method_not_allowed_handler() -> AppError {
    AppError::method_not_allowed("Method not allowed", json!({}))
}
