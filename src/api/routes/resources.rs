use axum::Json;
use serde_json::{json, Value};
use crate::models::CRISIS_RESOURCES;

pub async fn list_resources() -> Json<Value> {
    Json(json!({ "resources": CRISIS_RESOURCES }))
}
