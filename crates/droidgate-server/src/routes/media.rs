//! Media routes — camera information and photo capture.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{header, HeaderMap};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use uuid::Uuid;

use droidgate_core::Error;
use droidgate_dispatch::ops;

use crate::error::ApiError;
use crate::respond;
use crate::state::AppState;
use crate::validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/media/camera", get(camera))
}

/// GET /media/camera — `Accept: image/*` captures a photo from the selected
/// camera; any other Accept value returns camera information JSON.
async fn camera(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<validate::CameraQuery>,
) -> Result<Response, ApiError> {
    let cam = validate::camera(&query)?;

    let wants_image = headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|accept| accept.trim_start().starts_with("image/"))
        .unwrap_or(false);

    if !wants_image {
        let out = state.dispatcher.run(&ops::CAMERA_INFO).await?;
        return Ok(respond::json_text(&out.stdout));
    }

    // The capture path is unique per request so overlapping captures never
    // collide.
    let path = state
        .config
        .capture_dir
        .join(format!("camera-{}-{}.jpg", cam, Uuid::new_v4()));
    let path_arg = path.to_string_lossy().into_owned();

    let result = state
        .dispatcher
        .run_with(&ops::CAMERA_PHOTO, &["-c".to_string(), cam.to_string(), path_arg])
        .await;

    match result {
        Ok(_) if path.exists() => respond::binary_file(&path, "image/jpeg"),
        Ok(_) => Err(Error::Execution("camera produced no image".into()).into()),
        Err(err) => {
            // The tool may have written a partial file before failing.
            let _ = std::fs::remove_file(&path);
            Err(err.into())
        }
    }
}
