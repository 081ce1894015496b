use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};
use tracing::error;
use crate::errors::MindwellError;
use crate::responder::RequestError;

impl IntoResponse for RequestError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            RequestError::BadRequest(_) => StatusCode::BAD_REQUEST,
            RequestError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({"error": self.to_string()}))).into_response()
    }
}

/// Map a store or validation error to an HTTP error body. Errors the caller
/// can act on keep their message; everything else is logged and replaced
/// with `fallback`.
pub fn error_response(err: MindwellError, fallback: &str) -> (StatusCode, Json<Value>) {
    let class = err.classify();
    if !class.client_visible {
        error!(error_type = class.error_type, error = %err, "{}", fallback);
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"error": fallback})));
    }

    let status = match &err {
        MindwellError::NotFound(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::BAD_REQUEST,
    };
    let message = match err {
        MindwellError::InvalidInput(msg) | MindwellError::NotFound(msg) => msg,
        other => other.to_string(),
    };
    (status, Json(json!({"error": message})))
}
