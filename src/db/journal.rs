use crate::errors::MindwellError;
use crate::models::{JournalDraft, JournalEntry};
use super::connection::{db_now, from_db_time, to_db_time};
use super::Database;

const JOURNAL_COLUMNS: &str = "id, user_id, title, content, date, created_at, updated_at";

fn row_to_entry(row: &rusqlite::Row) -> rusqlite::Result<JournalEntry> {
    Ok(JournalEntry {
        id: row.get(0)?,
        user_id: row.get(1)?,
        title: row.get(2)?,
        content: row.get(3)?,
        date: from_db_time(4, &row.get::<_, String>(4)?)?,
        created_at: from_db_time(5, &row.get::<_, String>(5)?)?,
        updated_at: from_db_time(6, &row.get::<_, String>(6)?)?,
    })
}

impl Database {
    pub fn create_journal_entry(&self, user_id: &str, draft: &JournalDraft) -> Result<JournalEntry, MindwellError> {
        let now = db_now();
        let entry = JournalEntry {
            id: uuid::Uuid::new_v4().to_string(),
            title: draft.title.clone(),
            content: draft.content.clone(),
            date: now,
            user_id: user_id.to_string(),
            created_at: now,
            updated_at: now,
        };
        let stamp = to_db_time(now);

        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO journal_entries (id, user_id, title, content, date, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?5, ?5)",
            rusqlite::params![entry.id, entry.user_id, entry.title, entry.content, stamp],
        ).map_err(|e| MindwellError::Database(format!("Failed to create journal entry: {}", e)))?;
        Ok(entry)
    }

    pub fn get_journal_entry(&self, user_id: &str, id: &str) -> Result<Option<JournalEntry>, MindwellError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM journal_entries WHERE id = ?1 AND user_id = ?2",
            JOURNAL_COLUMNS
        )).map_err(|e| MindwellError::Database(format!("Query failed: {}", e)))?;

        match stmt.query_row(rusqlite::params![id, user_id], row_to_entry) {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(MindwellError::Database(format!("Query error: {}", e))),
        }
    }

    /// All entries for `user_id`, most recently written first.
    pub fn list_journal_entries(&self, user_id: &str) -> Result<Vec<JournalEntry>, MindwellError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM journal_entries WHERE user_id = ?1 ORDER BY date DESC, rowid DESC",
            JOURNAL_COLUMNS
        )).map_err(|e| MindwellError::Database(format!("Query failed: {}", e)))?;

        let rows = stmt.query_map(rusqlite::params![user_id], row_to_entry)
            .map_err(|e| MindwellError::Database(format!("Query error: {}", e)))?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row.map_err(|e| MindwellError::Database(format!("Row error: {}", e)))?);
        }
        Ok(results)
    }

    /// Replace title and content and move the entry's date to now.
    /// Returns `None` when no entry with this id belongs to `user_id`.
    pub fn update_journal_entry(
        &self,
        user_id: &str,
        id: &str,
        draft: &JournalDraft,
    ) -> Result<Option<JournalEntry>, MindwellError> {
        let stamp = to_db_time(db_now());
        let affected = {
            let conn = self.lock()?;
            conn.execute(
                "UPDATE journal_entries SET title = ?3, content = ?4, date = ?5, updated_at = ?5 WHERE id = ?1 AND user_id = ?2",
                rusqlite::params![id, user_id, draft.title, draft.content, stamp],
            ).map_err(|e| MindwellError::Database(format!("Update failed: {}", e)))?
        };

        if affected == 0 {
            return Ok(None);
        }
        self.get_journal_entry(user_id, id)
    }

    pub fn delete_journal_entry(&self, user_id: &str, id: &str) -> Result<bool, MindwellError> {
        let conn = self.lock()?;
        let affected = conn.execute(
            "DELETE FROM journal_entries WHERE id = ?1 AND user_id = ?2",
            rusqlite::params![id, user_id],
        ).map_err(|e| MindwellError::Database(format!("Delete failed: {}", e)))?;
        Ok(affected > 0)
    }
}
