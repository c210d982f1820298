//! Application error type and its HTTP representation.
//!
//! Errors fall into two tiers:
//!
//! - **Business-rule violations** (duplicate moniker, missing speaker, unknown
//!   camp) are returned as `400`/`404` with a plain-text reason.
//! - **Everything else** (database failures, broken invariants) becomes an opaque
//!   `500` with the fixed body `Database Failed`. The underlying cause is logged,
//!   never sent to the client.
//!
//! Field validation failures are the exception to the plain-text rule: they carry
//! per-field details, so they are rendered as a JSON envelope.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

/// Fixed body returned for every internal failure.
pub const INTERNAL_ERROR_BODY: &str = "Database Failed";

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Structured error payload used for validation failures.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request body or query failed field validation.
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// A business rule rejected the request.
    #[error("{0}")]
    BadRequest(String),

    /// The addressed resource does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Storage or other unexpected failure.
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn validation(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn bad_request(reason: impl Into<String>) -> Self {
        Self::BadRequest(reason.into())
    }

    pub fn not_found(reason: impl Into<String>) -> Self {
        Self::NotFound(reason.into())
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match self {
            AppError::Validation { message, details } => {
                tracing::debug!(%message, "Request rejected by validation");
                let body = ErrorBody {
                    error: ErrorInfo {
                        code: "validation_error",
                        message,
                        details,
                    },
                };
                (status, Json(body)).into_response()
            }
            AppError::BadRequest(reason) | AppError::NotFound(reason) => {
                (status, reason).into_response()
            }
            AppError::Internal { message, details } => {
                tracing::error!(%message, %details, "Request failed");
                (status, INTERNAL_ERROR_BODY).into_response()
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error() {
            return AppError::internal(
                "Database error",
                json!({ "message": db.message(), "constraint": db.constraint() }),
            );
        }

        AppError::internal("Database error", json!({ "message": e.to_string() }))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or_else(|_| json!({}));
        AppError::validation("Validation failed", details)
    }
}
