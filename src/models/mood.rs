use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::errors::MindwellError;

pub const MIN_MOOD: i64 = 1;
pub const MAX_MOOD: i64 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    #[serde(rename = "_id")]
    pub id: String,
    pub date: DateTime<Utc>,
    /// 1 (very low) to 5 (very good)
    pub mood: u8,
    pub notes: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MoodEntryRequest {
    pub mood: Option<i64>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodDraft {
    pub mood: u8,
    pub notes: String,
}

impl MoodEntryRequest {
    pub fn validate(self) -> Result<MoodDraft, MindwellError> {
        let mood = self.mood
            .ok_or_else(|| MindwellError::InvalidInput("Please rate your mood".into()))?;
        if !(MIN_MOOD..=MAX_MOOD).contains(&mood) {
            return Err(MindwellError::InvalidInput(format!(
                "Mood must be between {} and {}",
                MIN_MOOD, MAX_MOOD
            )));
        }
        Ok(MoodDraft {
            mood: mood as u8,
            notes: self.notes.unwrap_or_default(),
        })
    }
}

/// Chart-ready projection of a mood entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub date: DateTime<Utc>,
    pub mood: u8,
}

impl From<&MoodEntry> for TrendPoint {
    fn from(entry: &MoodEntry) -> Self {
        Self { date: entry.date, mood: entry.mood }
    }
}
