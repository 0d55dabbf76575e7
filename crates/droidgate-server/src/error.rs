//! HTTP error mapping for the core error taxonomy.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

use droidgate_core::Error as CoreError;

/// A single field-level validation problem.
#[derive(Debug, Clone, Serialize)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

impl FieldIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Errors surfaced to HTTP clients.
///
/// Auth and validation failures are client errors; everything else in the
/// core taxonomy (unreadable credential store, failed dispatch, IO) is a
/// 500 carrying the diagnostic message.
#[derive(Debug)]
pub enum ApiError {
    Core(CoreError),
    Validation(Vec<FieldIssue>),
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        Self::Core(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Core(err) => {
                let status = match &err {
                    CoreError::CredentialMismatch => StatusCode::UNPROCESSABLE_ENTITY,
                    CoreError::MalformedScheme
                    | CoreError::MissingToken
                    | CoreError::InvalidToken => StatusCode::UNAUTHORIZED,
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                };
                if status == StatusCode::INTERNAL_SERVER_ERROR {
                    error!(%err, "request failed");
                }
                (status, Json(serde_json::json!({ "msg": err.to_string() }))).into_response()
            }
            Self::Validation(issues) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(serde_json::json!({
                    "msg": "Unprocessable entity",
                    "errors": issues,
                })),
            )
                .into_response(),
        }
    }
}
