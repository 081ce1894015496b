use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tracing::info;
use crate::api::errors::error_response;
use crate::api::AppState;
use crate::errors::MindwellError;
use crate::models::JournalEntryRequest;

fn parse_body(payload: Result<Json<JournalEntryRequest>, JsonRejection>) -> Result<JournalEntryRequest, MindwellError> {
    payload
        .map(|Json(body)| body)
        .map_err(|e| MindwellError::InvalidInput(e.body_text()))
}

pub async fn list_entries(
    State(state): State<AppState>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let entries = state.db.list_journal_entries(&state.owner_id)
        .map_err(|e| error_response(e, "Failed to fetch journal entries"))?;

    Ok(Json(json!({ "journalEntries": entries })))
}

pub async fn create_entry(
    State(state): State<AppState>,
    payload: Result<Json<JournalEntryRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    let entry = parse_body(payload)
        .and_then(JournalEntryRequest::validate)
        .and_then(|draft| state.db.create_journal_entry(&state.owner_id, &draft))
        .map_err(|e| error_response(e, "Failed to create journal entry"))?;

    info!(entry_id = %entry.id, "Created journal entry");
    Ok((StatusCode::CREATED, Json(json!({ "journalEntry": entry }))))
}

pub async fn update_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<JournalEntryRequest>, JsonRejection>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let updated = parse_body(payload)
        .and_then(JournalEntryRequest::validate)
        .and_then(|draft| state.db.update_journal_entry(&state.owner_id, &id, &draft))
        .and_then(|entry| entry.ok_or_else(|| {
            MindwellError::NotFound("Journal entry not found or not authorized to update".into())
        }))
        .map_err(|e| error_response(e, "Failed to update journal entry"))?;

    Ok(Json(json!({ "journalEntry": updated })))
}

pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    match state.db.delete_journal_entry(&state.owner_id, &id) {
        Ok(true) => {
            info!(entry_id = %id, "Deleted journal entry");
            Ok(Json(json!({ "success": true })))
        }
        Ok(false) => Err((
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Journal entry not found or not authorized to delete" })),
        )),
        Err(e) => Err(error_response(e, "Failed to delete journal entry")),
    }
}
