use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::errors::MindwellError;

/// A private journal entry owned by one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub content: String,
    /// Last time the entry was written; refreshed on every update.
    pub date: DateTime<Utc>,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of create and update requests.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JournalEntryRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Validated journal fields, title trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalDraft {
    pub title: String,
    pub content: String,
}

impl JournalEntryRequest {
    pub fn validate(self) -> Result<JournalDraft, MindwellError> {
        let title = self.title.as_deref().map(str::trim).unwrap_or_default();
        if title.is_empty() {
            return Err(MindwellError::InvalidInput(
                "Please provide a title for your journal entry".into(),
            ));
        }

        let content = self.content.unwrap_or_default();
        if content.trim().is_empty() {
            return Err(MindwellError::InvalidInput(
                "Please provide content for your journal entry".into(),
            ));
        }

        Ok(JournalDraft { title: title.to_string(), content })
    }
}
