//! System routes — battery, brightness, vibration, volume, notifications,
//! location.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Response;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::json;

use droidgate_dispatch::ops;

use crate::error::ApiError;
use crate::respond;
use crate::state::AppState;
use crate::validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/battery-status", get(battery_status))
        .route("/brightness", put(set_brightness))
        .route("/vibrate", post(trigger_vibrate))
        .route("/volume", get(volume_info).put(change_volume))
        .route("/notifications", get(notifications))
        .route("/location", get(location))
}

/// GET /battery-status — current battery state.
async fn battery_status(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let out = state.dispatcher.run(&ops::BATTERY_STATUS).await?;
    Ok(respond::json_text(&out.stdout))
}

/// PUT /brightness — set the screen brightness.
async fn set_brightness(
    State(state): State<Arc<AppState>>,
    Json(body): Json<validate::BrightnessBody>,
) -> Result<Response, ApiError> {
    let value = validate::brightness(&body)?;
    state
        .dispatcher
        .run_with(&ops::SET_BRIGHTNESS, &[value.to_string()])
        .await?;
    Ok(respond::no_content())
}

/// POST /vibrate — trigger a vibration.
async fn trigger_vibrate(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    state.dispatcher.run(&ops::VIBRATE).await?;
    Ok(respond::no_content())
}

/// GET /volume — current volume of every audio stream.
async fn volume_info(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let out = state.dispatcher.run(&ops::VOLUME_INFO).await?;
    Ok(respond::json_text(&out.stdout))
}

/// PUT /volume — set the volume of one audio stream.
async fn change_volume(
    State(state): State<Arc<AppState>>,
    Json(body): Json<validate::VolumeBody>,
) -> Result<Response, ApiError> {
    validate::volume(&body)?;
    state
        .dispatcher
        .run_with(&ops::SET_VOLUME, &[body.stream.clone(), body.volume.to_string()])
        .await?;
    Ok(respond::no_content())
}

/// GET /notifications — currently displayed notifications.
async fn notifications(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let out = state.dispatcher.run(&ops::NOTIFICATION_LIST).await?;
    Ok(respond::json_text(&out.stdout))
}

/// GET /location — GPS lookup is not wired to a tool yet.
async fn location() -> Json<serde_json::Value> {
    Json(json!({ "status": "pending" }))
}
