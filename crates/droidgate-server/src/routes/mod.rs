//! HTTP route handlers, grouped by the device's capability areas.

pub mod login;
pub mod media;
pub mod network;
pub mod phone;
pub mod system;

use std::sync::Arc;

use axum::{middleware, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth;
use crate::state::AppState;

/// Build the main axum router with all routes.
///
/// Everything except the login route sits behind the bearer-auth
/// middleware.
pub fn build_router(state: Arc<AppState>) -> Router {
    let protected = Router::new()
        .merge(system::routes())
        .merge(phone::routes())
        .merge(media::routes())
        .merge(network::routes())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_bearer,
        ));

    Router::new()
        .merge(login::routes())
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
