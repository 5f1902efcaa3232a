//! Note repository implementation.

use std::collections::HashMap;
use std::time::Instant;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Pool, QueryBuilder, Row, Sqlite, Transaction};
use tracing::{debug, info, warn};

use notebook_core::defaults::DUPLICATE_TITLE_MSG;
use notebook_core::{
    Comment, CreateCommentRequest, CreateNoteRequest, Error, Note, NoteRepository, Result,
};

/// Upper bound on `IN (...)` parameters per comment query.
const COMMENT_BATCH_SIZE: usize = 500;

/// SQLite implementation of NoteRepository.
#[derive(Clone)]
pub struct SqliteNoteRepository {
    pool: Pool<Sqlite>,
}

impl SqliteNoteRepository {
    /// Create a new SqliteNoteRepository with the given connection pool.
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }
}

// =============================================================================
// ROW MAPPING
// =============================================================================

/// Map a `notes` row to a Note with no comments attached yet.
fn map_row_to_note(row: &SqliteRow) -> Result<Note> {
    Ok(Note {
        id: row.try_get("id").map_err(Error::Database)?,
        title: row.try_get("title").map_err(Error::Database)?,
        content: row.try_get("content").map_err(Error::Database)?,
        date_created: row.try_get("date_created").map_err(Error::Database)?,
        comments: Vec::new(),
    })
}

fn map_row_to_comment(row: &SqliteRow) -> Result<Comment> {
    Ok(Comment {
        id: row.try_get("id").map_err(Error::Database)?,
        note_id: row.try_get("note_id").map_err(Error::Database)?,
        content: row.try_get("content").map_err(Error::Database)?,
        date_created: row.try_get("date_created").map_err(Error::Database)?,
    })
}

/// Translate a UNIQUE violation on `notes.title` into a conflict.
///
/// The conditional INSERT already rejects known titles; this covers whatever
/// the store itself refuses.
fn map_insert_error(err: sqlx::Error) -> Error {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            Error::Conflict(DUPLICATE_TITLE_MSG.to_string())
        }
        _ => Error::Database(err),
    }
}

#[async_trait]
impl NoteRepository for SqliteNoteRepository {
    async fn create_note(&self, req: CreateNoteRequest) -> Result<Note> {
        let mut tx = self.pool.begin().await.map_err(Error::Database)?;
        let result = self.create_note_tx(&mut tx, req).await?;
        tx.commit().await.map_err(map_insert_error)?;
        Ok(result)
    }

    async fn list_notes(&self) -> Result<Vec<Note>> {
        let mut tx = self.pool.begin().await.map_err(Error::Database)?;
        let result = self.list_notes_tx(&mut tx).await?;
        tx.commit().await.map_err(Error::Database)?;
        Ok(result)
    }

    async fn get_note(&self, id: i64) -> Result<Note> {
        let mut tx = self.pool.begin().await.map_err(Error::Database)?;
        let result = self.get_note_tx(&mut tx, id).await?;
        tx.commit().await.map_err(Error::Database)?;
        Ok(result)
    }

    async fn delete_note(&self, id: i64) -> Result<Note> {
        let mut tx = self.pool.begin().await.map_err(Error::Database)?;
        let result = self.delete_note_tx(&mut tx, id).await?;
        tx.commit().await.map_err(Error::Database)?;
        Ok(result)
    }

    async fn add_comment(&self, req: CreateCommentRequest) -> Result<Comment> {
        let mut tx = self.pool.begin().await.map_err(Error::Database)?;
        let result = self.add_comment_tx(&mut tx, req).await?;
        tx.commit().await.map_err(Error::Database)?;
        Ok(result)
    }

    async fn search(&self, query: &str) -> Result<Vec<Note>> {
        let mut tx = self.pool.begin().await.map_err(Error::Database)?;
        let result = self.search_tx(&mut tx, query).await?;
        tx.commit().await.map_err(Error::Database)?;
        Ok(result)
    }

    async fn exists(&self, id: i64) -> Result<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM notes WHERE id = ?)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(Error::Database)?;
        Ok(exists)
    }

    async fn count_notes(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM notes")
            .fetch_one(&self.pool)
            .await
            .map_err(Error::Database)?;
        Ok(count)
    }
}

// =============================================================================
// TRANSACTION-AWARE VARIANTS
// =============================================================================

/// Transaction-aware variants.
///
/// These accept an existing transaction so several operations can be composed
/// under one commit.
impl SqliteNoteRepository {
    /// Insert a note within an existing transaction.
    pub async fn create_note_tx(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        req: CreateNoteRequest,
    ) -> Result<Note> {
        req.validate()?;

        // The title check rides inside the INSERT so the statement takes the
        // write lock before it reads.
        let now = Utc::now();
        let inserted = sqlx::query(
            "INSERT INTO notes (title, content, date_created)
             SELECT ?, ?, ?
             WHERE NOT EXISTS (SELECT 1 FROM notes WHERE title = ?)",
        )
        .bind(&req.title)
        .bind(&req.content)
        .bind(now)
        .bind(&req.title)
        .execute(&mut **tx)
        .await
        .map_err(map_insert_error)?;

        if inserted.rows_affected() == 0 {
            debug!(
                subsystem = "database",
                component = "notes",
                op = "create_note",
                "Rejected duplicate title"
            );
            return Err(Error::Conflict(DUPLICATE_TITLE_MSG.to_string()));
        }

        let note = Note {
            id: inserted.last_insert_rowid(),
            title: req.title,
            content: req.content,
            date_created: now,
            comments: Vec::new(),
        };

        info!(
            subsystem = "database",
            component = "notes",
            op = "create_note",
            note_id = note.id,
            "Note created"
        );
        Ok(note)
    }

    /// List all notes with comments within an existing transaction.
    pub async fn list_notes_tx(&self, tx: &mut Transaction<'_, Sqlite>) -> Result<Vec<Note>> {
        let rows = sqlx::query("SELECT id, title, content, date_created FROM notes ORDER BY id")
            .fetch_all(&mut **tx)
            .await
            .map_err(Error::Database)?;

        let notes = rows
            .iter()
            .map(map_row_to_note)
            .collect::<Result<Vec<_>>>()?;
        let notes = attach_comments(tx, notes).await?;

        debug!(
            subsystem = "database",
            component = "notes",
            op = "list_notes",
            result_count = notes.len(),
            "Listed notes"
        );
        Ok(notes)
    }

    /// Fetch a note with comments within an existing transaction.
    pub async fn get_note_tx(&self, tx: &mut Transaction<'_, Sqlite>, id: i64) -> Result<Note> {
        let row = sqlx::query("SELECT id, title, content, date_created FROM notes WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
            .map_err(Error::Database)?
            .ok_or(Error::NoteNotFound(id))?;

        let note = map_row_to_note(&row)?;
        let mut notes = attach_comments(tx, vec![note]).await?;
        notes.pop().ok_or(Error::NoteNotFound(id))
    }

    /// Delete a note and its comments within an existing transaction.
    pub async fn delete_note_tx(&self, tx: &mut Transaction<'_, Sqlite>, id: i64) -> Result<Note> {
        // Comments go first so the transaction holds the write lock before the
        // note row is read back.
        let comment_rows = sqlx::query(
            "DELETE FROM comments WHERE note_id = ?
             RETURNING id, note_id, content, date_created",
        )
        .bind(id)
        .fetch_all(&mut **tx)
        .await
        .map_err(Error::Database)?;

        let note_row = sqlx::query(
            "DELETE FROM notes WHERE id = ?
             RETURNING id, title, content, date_created",
        )
        .bind(id)
        .fetch_optional(&mut **tx)
        .await
        .map_err(Error::Database)?
        .ok_or(Error::NoteNotFound(id))?;

        let mut note = map_row_to_note(&note_row)?;
        note.comments = comment_rows
            .iter()
            .map(map_row_to_comment)
            .collect::<Result<Vec<_>>>()?;
        note.comments.sort_by_key(|c| c.id);
        let removed_comments = note.comments.len();

        info!(
            subsystem = "database",
            component = "notes",
            op = "delete_note",
            note_id = id,
            comment_count = removed_comments,
            "Note deleted"
        );
        Ok(note)
    }

    /// Attach a comment within an existing transaction.
    pub async fn add_comment_tx(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        req: CreateCommentRequest,
    ) -> Result<Comment> {
        req.validate()?;

        let now = Utc::now();
        let inserted = sqlx::query(
            "INSERT INTO comments (note_id, content, date_created)
             SELECT ?, ?, ?
             WHERE EXISTS (SELECT 1 FROM notes WHERE id = ?)",
        )
        .bind(req.note_id)
        .bind(&req.content)
        .bind(now)
        .bind(req.note_id)
        .execute(&mut **tx)
        .await
        .map_err(Error::Database)?;

        if inserted.rows_affected() == 0 {
            return Err(Error::NoteNotFound(req.note_id));
        }

        let comment = Comment {
            id: inserted.last_insert_rowid(),
            note_id: req.note_id,
            content: req.content,
            date_created: now,
        };

        info!(
            subsystem = "database",
            component = "notes",
            op = "add_comment",
            note_id = comment.note_id,
            comment_id = comment.id,
            "Comment added"
        );
        Ok(comment)
    }

    /// Substring search over titles, contents, and comments within an existing transaction.
    ///
    /// `instr` keeps matching case-sensitive; `LIKE` would fold ASCII case.
    pub async fn search_tx(&self, tx: &mut Transaction<'_, Sqlite>, query: &str) -> Result<Vec<Note>> {
        let start = Instant::now();

        if query.is_empty() {
            return self.list_notes_tx(tx).await;
        }

        let rows = sqlx::query(
            "SELECT n.id, n.title, n.content, n.date_created
             FROM notes n
             WHERE instr(n.title, ?) > 0
                OR instr(n.content, ?) > 0
                OR EXISTS (
                    SELECT 1 FROM comments c
                    WHERE c.note_id = n.id AND instr(c.content, ?) > 0
                )
             ORDER BY n.id",
        )
        .bind(query)
        .bind(query)
        .bind(query)
        .fetch_all(&mut **tx)
        .await
        .map_err(Error::Database)?;

        let notes = rows
            .iter()
            .map(map_row_to_note)
            .collect::<Result<Vec<_>>>()?;
        let notes = attach_comments(tx, notes).await?;

        let elapsed = start.elapsed().as_millis() as u64;
        debug!(
            subsystem = "database",
            component = "notes",
            op = "search",
            query = %query,
            result_count = notes.len(),
            duration_ms = elapsed,
            "Search complete"
        );
        if elapsed > 1000 {
            warn!(
                subsystem = "database",
                component = "notes",
                op = "search",
                duration_ms = elapsed,
                "Slow search"
            );
        }
        Ok(notes)
    }
}

/// Load the comments of every given note in batched queries and attach them.
///
/// Comments come back in id order, which is creation order.
async fn attach_comments(tx: &mut Transaction<'_, Sqlite>, mut notes: Vec<Note>) -> Result<Vec<Note>> {
    if notes.is_empty() {
        return Ok(notes);
    }

    let ids: Vec<i64> = notes.iter().map(|n| n.id).collect();
    let mut by_note: HashMap<i64, Vec<Comment>> = HashMap::new();

    for batch in ids.chunks(COMMENT_BATCH_SIZE) {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
            "SELECT id, note_id, content, date_created FROM comments WHERE note_id IN (",
        );
        let mut separated = builder.separated(", ");
        for id in batch {
            separated.push_bind(*id);
        }
        separated.push_unseparated(") ORDER BY id");

        let rows = builder
            .build()
            .fetch_all(&mut **tx)
            .await
            .map_err(Error::Database)?;

        for row in &rows {
            let comment = map_row_to_comment(row)?;
            by_note.entry(comment.note_id).or_default().push(comment);
        }
    }

    for note in &mut notes {
        if let Some(comments) = by_note.remove(&note.id) {
            note.comments = comments;
        }
    }
    Ok(notes)
}
