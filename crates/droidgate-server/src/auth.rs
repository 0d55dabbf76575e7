//! Bearer authentication middleware for protected routes.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

use droidgate_core::{token, Error};

use crate::error::ApiError;
use crate::state::AppState;

/// Gate protected routes on a valid `Bearer <token>` Authorization header.
///
/// The credential is re-read on every request, so replacing the credential
/// file invalidates outstanding tokens immediately. A missing or unreadable
/// credential file fails the request as a server-side problem, never as a
/// pass-through.
pub async fn require_bearer(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header_value = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(Error::MissingToken)?;

    let mut parts = header_value.splitn(2, ' ');
    if parts.next() != Some("Bearer") {
        return Err(Error::MalformedScheme.into());
    }
    let bearer = parts
        .next()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(Error::MissingToken)?;

    let credential = state.credentials.load()?;
    token::verify(bearer, &credential.password)?;

    Ok(next.run(req).await)
}
