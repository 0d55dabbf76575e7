//! Phone utility routes — call log, contacts, SMS.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};

use droidgate_dispatch::ops;

use crate::error::ApiError;
use crate::respond;
use crate::state::AppState;
use crate::validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/call-log", get(call_log))
        .route("/contacts", get(contacts))
        .route("/sms", get(sms_list).post(sms_send))
}

/// GET /call-log — recent calls.
async fn call_log(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let out = state.dispatcher.run(&ops::CALL_LOG).await?;
    Ok(respond::json_text(&out.stdout))
}

/// GET /contacts — saved contact list.
async fn contacts(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let out = state.dispatcher.run(&ops::CONTACT_LIST).await?;
    Ok(respond::json_text(&out.stdout))
}

/// GET /sms — inbox listing.
async fn sms_list(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let out = state.dispatcher.run(&ops::SMS_LIST).await?;
    Ok(respond::json_text(&out.stdout))
}

/// POST /sms — validate the whole batch up front, then send each message.
///
/// A dispatch failure stops the loop and surfaces the diagnostic; entries
/// already handed to the tool stay sent, since SMS offers no rollback.
async fn sms_send(
    State(state): State<Arc<AppState>>,
    Json(entries): Json<Vec<validate::SmsEntry>>,
) -> Result<Response, ApiError> {
    validate::sms_batch(&entries)?;

    for entry in &entries {
        let args = [
            "-n".to_string(),
            entry.to.clone(),
            "-s".to_string(),
            entry.sim_slot.to_string(),
            entry.body.clone(),
        ];
        state.dispatcher.run_with(&ops::SMS_SEND, &args).await?;
    }

    Ok(respond::created())
}
