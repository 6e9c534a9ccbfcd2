//! Application error type and its HTTP representation.
//!
//! Every failure a handler can produce is an [`AppError`]. Expected outcomes
//! (validation, not found, conflict) carry a client-facing message and
//! details; internal faults are logged here and reach the client only as a
//! generic message.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::validation::LayoutError;

const UNIQUE_ID: &str = "golf_courses_pkey";
const UNIQUE_NAME_LOCATION: &str = "golf_courses_name_location_key";

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
    data: Option<()>,
    error: ErrorInfo,
}

/// Machine-readable part of an error response.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub details: Value,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    MethodNotAllowed { message: String, details: Value },
    Conflict { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn method_not_allowed(message: impl Into<String>, details: Value) -> Self {
        Self::MethodNotAllowed {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::Validation { message, .. }
            | AppError::NotFound { message, .. }
            | AppError::MethodNotAllowed { message, .. }
            | AppError::Conflict { message, .. }
            | AppError::Internal { message, .. } => message,
        }
    }

    /// Splits the error into its client-facing message and [`ErrorInfo`].
    ///
    /// Internal details never leave the process.
    pub fn into_parts(self) -> (String, ErrorInfo) {
        match self {
            AppError::Validation { message, details } => (
                message,
                ErrorInfo {
                    code: "validation_error",
                    details,
                },
            ),
            AppError::NotFound { message, details } => (
                message,
                ErrorInfo {
                    code: "not_found",
                    details,
                },
            ),
            AppError::MethodNotAllowed { message, details } => (
                message,
                ErrorInfo {
                    code: "method_not_allowed",
                    details,
                },
            ),
            AppError::Conflict { message, details } => (
                message,
                ErrorInfo {
                    code: "conflict",
                    details,
                },
            ),
            AppError::Internal { message, .. } => (
                message,
                ErrorInfo {
                    code: "internal_error",
                    details: json!({}),
                },
            ),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (message, error) = self.into_parts();

        let body = ErrorBody {
            success: false,
            message,
            data: None,
            error,
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error() {
            if db.is_unique_violation() {
                let message = match db.constraint() {
                    Some(UNIQUE_ID) => "Golf course with this id already exists",
                    Some(UNIQUE_NAME_LOCATION) => {
                        "Golf course with this name and location already exists"
                    }
                    _ => "Unique constraint violation",
                };
                return AppError::conflict(message, json!({ "constraint": db.constraint() }));
            }
            if db.is_foreign_key_violation() {
                return AppError::conflict(
                    "Golf course is still referenced by other records",
                    json!({ "constraint": db.constraint() }),
                );
            }
        }

        tracing::error!(error = %e, "Database error");
        AppError::internal("Database error", json!({}))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::bad_request("Validation failed", json!(e))
    }
}

impl From<LayoutError> for AppError {
    fn from(e: LayoutError) -> Self {
        AppError::bad_request("Invalid hole layout", json!({ "reason": e.to_string() }))
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::bad_request("Invalid request body", json!({ "reason": e.body_text() }))
    }
}

impl From<PathRejection> for AppError {
    fn from(e: PathRejection) -> Self {
        AppError::bad_request("Invalid path parameter", json!({ "reason": e.body_text() }))
    }
}

impl From<QueryRejection> for AppError {
    fn from(e: QueryRejection) -> Self {
        AppError::bad_request(
            "Invalid query parameters",
            json!({ "reason": e.body_text() }),
        )
    }
}
