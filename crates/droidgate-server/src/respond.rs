//! Response translation — raw command output to HTTP payloads.

use std::path::Path;

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::value::RawValue;
use tracing::warn;

use droidgate_core::Error as CoreError;

use crate::error::ApiError;

/// Pass a tool's JSON stdout through unchanged.
///
/// Output that is not valid JSON is re-encoded as a JSON string value;
/// either way the captured text is preserved exactly.
pub fn json_text(stdout: &str) -> Response {
    let trimmed = stdout.trim();
    let body = if serde_json::from_str::<&RawValue>(trimmed).is_ok() {
        trimmed.to_owned()
    } else {
        serde_json::Value::String(stdout.to_owned()).to_string()
    };
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}

/// Stream a captured file and remove it, whether or not the read succeeds.
pub fn binary_file(path: &Path, content_type: &'static str) -> Result<Response, ApiError> {
    let bytes = std::fs::read(path);
    if let Err(err) = std::fs::remove_file(path) {
        warn!(path = %path.display(), %err, "failed to remove capture artifact");
    }
    let bytes = bytes.map_err(|e| {
        ApiError::Core(CoreError::Execution(format!(
            "capture artifact unreadable: {e}"
        )))
    })?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, content_type)],
        bytes,
    )
        .into_response())
}

/// Empty success for operations with no output.
pub fn no_content() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

/// Empty success for operations that created something.
pub fn created() -> Response {
    StatusCode::CREATED.into_response()
}
