use crate::errors::MindwellError;
use crate::models::{MoodDraft, MoodEntry};
use super::connection::{db_now, from_db_time, to_db_time};
use super::Database;

fn row_to_entry(row: &rusqlite::Row) -> rusqlite::Result<MoodEntry> {
    Ok(MoodEntry {
        id: row.get(0)?,
        user_id: row.get(1)?,
        mood: row.get(2)?,
        notes: row.get(3)?,
        date: from_db_time(4, &row.get::<_, String>(4)?)?,
        created_at: from_db_time(5, &row.get::<_, String>(5)?)?,
        updated_at: from_db_time(6, &row.get::<_, String>(6)?)?,
    })
}

impl Database {
    pub fn create_mood_entry(&self, user_id: &str, draft: &MoodDraft) -> Result<MoodEntry, MindwellError> {
        let now = db_now();
        let entry = MoodEntry {
            id: uuid::Uuid::new_v4().to_string(),
            date: now,
            mood: draft.mood,
            notes: draft.notes.clone(),
            user_id: user_id.to_string(),
            created_at: now,
            updated_at: now,
        };
        let stamp = to_db_time(now);

        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO mood_entries (id, user_id, mood, notes, date, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?5, ?5)",
            rusqlite::params![entry.id, entry.user_id, entry.mood, entry.notes, stamp],
        ).map_err(|e| MindwellError::Database(format!("Failed to create mood entry: {}", e)))?;
        Ok(entry)
    }

    /// Up to `limit` entries for `user_id`, newest first. `None` returns all.
    pub fn list_mood_entries(&self, user_id: &str, limit: Option<usize>) -> Result<Vec<MoodEntry>, MindwellError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT id, user_id, mood, notes, date, created_at, updated_at FROM mood_entries WHERE user_id = ?1 ORDER BY date DESC, rowid DESC LIMIT ?2"
        ).map_err(|e| MindwellError::Database(format!("Query failed: {}", e)))?;

        // SQLite treats a negative LIMIT as unbounded
        let limit = limit.map(|l| l as i64).unwrap_or(-1);
        let rows = stmt.query_map(rusqlite::params![user_id, limit], row_to_entry)
            .map_err(|e| MindwellError::Database(format!("Query error: {}", e)))?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row.map_err(|e| MindwellError::Database(format!("Row error: {}", e)))?);
        }
        Ok(results)
    }
}
