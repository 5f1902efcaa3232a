//! Schema bootstrap.
//!
//! Tables are created when absent and never altered afterwards.

use sqlx::SqlitePool;
use tracing::info;

use notebook_core::{Error, Result};

const CREATE_NOTES: &str = "CREATE TABLE IF NOT EXISTS notes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL UNIQUE,
    content TEXT NOT NULL,
    date_created TEXT NOT NULL
)";

const CREATE_COMMENTS: &str = "CREATE TABLE IF NOT EXISTS comments (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    note_id INTEGER NOT NULL REFERENCES notes(id) ON DELETE CASCADE,
    content TEXT NOT NULL,
    date_created TEXT NOT NULL
)";

const CREATE_COMMENTS_NOTE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_comments_note_id ON comments(note_id)";

/// Create the `notes` and `comments` tables if they do not exist yet.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<()> {
    let mut tx = pool.begin().await.map_err(Error::Database)?;
    for statement in [CREATE_NOTES, CREATE_COMMENTS, CREATE_COMMENTS_NOTE_INDEX] {
        sqlx::query(statement)
            .execute(&mut *tx)
            .await
            .map_err(Error::Database)?;
    }
    tx.commit().await.map_err(Error::Database)?;

    info!(
        subsystem = "database",
        component = "schema",
        op = "ensure",
        "Schema ready"
    );
    Ok(())
}
