//! Network information routes — telephony and Wi-Fi.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Response;
use axum::routing::get;
use axum::Router;

use droidgate_dispatch::ops;

use crate::error::ApiError;
use crate::respond;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/network/cell-info", get(cell_info))
        .route("/network/device-info", get(device_info))
        .route("/network/wifi/connection-info", get(wifi_connection_info))
        .route("/network/wifi/scan-info", get(wifi_scan_info))
}

/// GET /network/cell-info — cellular tower information.
async fn cell_info(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let out = state.dispatcher.run(&ops::CELL_INFO).await?;
    Ok(respond::json_text(&out.stdout))
}

/// GET /network/device-info — telephony device information.
async fn device_info(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let out = state.dispatcher.run(&ops::DEVICE_INFO).await?;
    Ok(respond::json_text(&out.stdout))
}

/// GET /network/wifi/connection-info — current Wi-Fi connection.
async fn wifi_connection_info(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let out = state.dispatcher.run(&ops::WIFI_CONNECTION_INFO).await?;
    Ok(respond::json_text(&out.stdout))
}

/// GET /network/wifi/scan-info — last Wi-Fi scan results.
async fn wifi_scan_info(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let out = state.dispatcher.run(&ops::WIFI_SCAN_INFO).await?;
    Ok(respond::json_text(&out.stdout))
}
