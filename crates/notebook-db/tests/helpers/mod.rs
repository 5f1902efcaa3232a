//! Shared setup for the storage integration tests.
//!
//! Every test gets its own SQLite file inside a temporary directory, so tests
//! run in parallel without seeing each other's rows.

#![allow(dead_code)]

use notebook_db::{Database, PoolConfig};
use tempfile::TempDir;

/// A database file that is removed when the value is dropped.
pub struct TestDatabase {
    pub db: Database,
    _dir: TempDir,
}

impl TestDatabase {
    pub async fn new() -> Self {
        Self::with_config(PoolConfig::default()).await
    }

    pub async fn with_config(config: PoolConfig) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let url = format!("sqlite://{}", dir.path().join("notes.db").display());
        let db = Database::connect_with_config(&url, config)
            .await
            .expect("Failed to open test database");
        Self { db, _dir: dir }
    }

    /// Raw comment row count for a note, bypassing the repository.
    pub async fn comment_rows_for(&self, note_id: i64) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM comments WHERE note_id = ?")
            .bind(note_id)
            .fetch_one(self.db.pool())
            .await
            .expect("Failed to count comments")
    }

    /// Raw comment row count across all notes.
    pub async fn total_comment_rows(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM comments")
            .fetch_one(self.db.pool())
            .await
            .expect("Failed to count comments")
    }
}
