//! Login route — exchanges the device password for a bearer token.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;

use droidgate_core::{credential, token, Error};

use crate::error::{ApiError, FieldIssue};
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/auth", post(login))
}

#[derive(Debug, Deserialize)]
struct LoginBody {
    password: Option<String>,
}

/// POST /auth — compare the submitted password's digest against the stored
/// credential and mint a token on match.
async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginBody>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let submitted = match body.password.as_deref() {
        Some(p) if !p.is_empty() => p,
        _ => {
            return Err(ApiError::Validation(vec![FieldIssue::new(
                "password",
                "is required",
            )]))
        }
    };

    let stored = state.credentials.load()?;
    if credential::password_digest(submitted) != stored.password {
        return Err(Error::CredentialMismatch.into());
    }

    let token = token::mint(&stored.password)?;
    Ok(Json(json!({ "type": "bearer", "token": token })))
}
