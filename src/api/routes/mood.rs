use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use crate::api::errors::error_response;
use crate::api::models::TrendQuery;
use crate::api::AppState;
use crate::errors::MindwellError;
use crate::models::{MoodEntryRequest, TrendPoint};

pub async fn list_entries(
    State(state): State<AppState>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let entries = state.db.list_mood_entries(&state.owner_id, None)
        .map_err(|e| error_response(e, "Failed to fetch mood entries"))?;

    Ok(Json(json!({ "moodEntries": entries })))
}

pub async fn create_entry(
    State(state): State<AppState>,
    payload: Result<Json<MoodEntryRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    let entry = payload
        .map(|Json(body)| body)
        .map_err(|e| MindwellError::InvalidInput(e.body_text()))
        .and_then(MoodEntryRequest::validate)
        .and_then(|draft| state.db.create_mood_entry(&state.owner_id, &draft))
        .map_err(|e| error_response(e, "Failed to create mood entry"))?;

    Ok((StatusCode::CREATED, Json(json!({ "moodEntry": entry }))))
}

/// Latest mood entries, oldest first, for charting.
pub async fn trend(
    State(state): State<AppState>,
    Query(query): Query<TrendQuery>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let entries = state.db.list_mood_entries(&state.owner_id, Some(query.limit()))
        .map_err(|e| error_response(e, "Failed to fetch mood entries"))?;

    let points: Vec<TrendPoint> = entries.iter().rev().map(TrendPoint::from).collect();
    Ok(Json(json!({ "points": points })))
}
