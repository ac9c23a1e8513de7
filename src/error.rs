//! Application error taxonomy and its HTTP mapping.
//!
//! Catalog and persistence failures propagate unchanged from the component that
//! observed them; only the web layer turns them into responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Error payload returned to API clients.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// The client-credentials exchange was answered with a non-success status.
    #[error("catalog authentication failed with status {status}")]
    Authentication { status: u16 },

    /// A search or detail request was answered with a non-success status.
    #[error("catalog query failed with status {status}")]
    CatalogQuery { status: u16 },

    /// A success response lacked a structural field (`pagination`, `animals`, ...).
    #[error("malformed catalog response: missing `{field}`")]
    MalformedResponse { field: String },

    /// A success response lacked the field the caller asked for.
    #[error("missing field `{field}` in catalog response")]
    MissingField { field: String },

    /// The catalog could not be reached or its body could not be read.
    #[error("catalog transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A store read, write or commit failed.
    #[error("persistence error: {0}")]
    Persistence(#[from] sqlx::Error),

    #[error("{message}")]
    Validation { message: String, details: Value },
}

impl AppError {
    pub fn malformed(field: impl Into<String>) -> Self {
        Self::MalformedResponse {
            field: field.into(),
        }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    /// HTTP status, stable error code and details for this error.
    fn parts(&self) -> (StatusCode, &'static str, Value) {
        match self {
            AppError::Authentication { status } => (
                StatusCode::BAD_GATEWAY,
                "catalog_authentication_failed",
                json!({ "upstream_status": status }),
            ),
            AppError::CatalogQuery { status: 404 } => (
                StatusCode::NOT_FOUND,
                "not_found",
                json!({ "upstream_status": 404 }),
            ),
            AppError::CatalogQuery { status } => (
                StatusCode::BAD_GATEWAY,
                "catalog_query_failed",
                json!({ "upstream_status": status }),
            ),
            AppError::MalformedResponse { field } => (
                StatusCode::BAD_GATEWAY,
                "catalog_malformed_response",
                json!({ "field": field }),
            ),
            AppError::MissingField { field } => (
                StatusCode::BAD_GATEWAY,
                "catalog_missing_field",
                json!({ "field": field }),
            ),
            AppError::Transport(_) => (
                StatusCode::BAD_GATEWAY,
                "catalog_unavailable",
                json!({}),
            ),
            AppError::Persistence(e) => match e.as_database_error() {
                Some(db) if db.is_unique_violation() => (
                    StatusCode::CONFLICT,
                    "conflict",
                    json!({ "constraint": db.constraint() }),
                ),
                _ => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    json!({}),
                ),
            },
            AppError::Validation { details, .. } => {
                (StatusCode::BAD_REQUEST, "validation_error", details.clone())
            }
        }
    }

    pub fn status_code(&self) -> StatusCode {
        self.parts().0
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (_, code, details) = self.parts();
        ErrorInfo {
            code,
            message: self.to_string(),
            details,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or(Value::Null);
        AppError::bad_request("Validation failed", details)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}
