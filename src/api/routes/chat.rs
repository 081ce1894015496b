use axum::{body::Bytes, extract::State, Json};
use serde_json::Value;
use tracing::debug;
use crate::api::AppState;
use crate::responder::{CompletionResult, RequestError, INVALID_FORMAT};

/// `POST /api/chat`. The body is parsed by hand so that non-JSON input gets
/// the same 400 as a malformed message list.
pub async fn chat(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CompletionResult>, RequestError> {
    let payload: Value = serde_json::from_slice(&body).map_err(|e| {
        debug!(error = %e, "Chat body is not JSON");
        RequestError::BadRequest(INVALID_FORMAT.to_string())
    })?;

    let result = state.responder.handle(&payload).await?;
    Ok(Json(result))
}
