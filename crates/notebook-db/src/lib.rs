//! # notebook-db
//!
//! SQLite database layer for the notebook service.
//!
//! This crate provides:
//! - Connection pool management
//! - Schema bootstrap for the `notes` and `comments` tables
//! - The [`SqliteNoteRepository`] implementation of the note service
//!
//! ## Example
//!
//! ```rust,ignore
//! use notebook_db::{CreateNoteRequest, Database, NoteRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::connect("sqlite://notes.db").await?;
//!
//!     let note = db
//!         .notes
//!         .create_note(CreateNoteRequest::new("Groceries", "milk, eggs"))
//!         .await?;
//!
//!     println!("Created note: {}", note.id);
//!     Ok(())
//! }
//! ```
pub mod notes;
pub mod pool;
pub mod schema;

// Re-export core types
pub use notebook_core::*;

pub use notes::SqliteNoteRepository;
pub use pool::{connect_options, create_pool, create_pool_with_config, log_pool_metrics, PoolConfig};
pub use schema::ensure_schema;

/// Combined database context: the pool plus the repositories built on it.
#[derive(Clone)]
pub struct Database {
    /// The underlying connection pool.
    pub pool: sqlx::SqlitePool,
    /// Note repository for the note service operations.
    pub notes: SqliteNoteRepository,
}

impl Database {
    /// Create a new Database instance from a connection pool.
    ///
    /// Does not touch the schema; use [`Database::connect`] or call
    /// [`ensure_schema`] yourself.
    pub fn new(pool: sqlx::SqlitePool) -> Self {
        Self {
            notes: SqliteNoteRepository::new(pool.clone()),
            pool,
        }
    }

    /// Connect to the given URL and create the schema if it is absent.
    pub async fn connect(url: &str) -> Result<Self> {
        Self::connect_with_config(url, PoolConfig::default()).await
    }

    /// Connect with custom pool configuration and create the schema if it is absent.
    pub async fn connect_with_config(url: &str, config: PoolConfig) -> Result<Self> {
        let pool = create_pool_with_config(url, config).await?;
        ensure_schema(&pool).await?;
        Ok(Self::new(pool))
    }

    /// Get the underlying connection pool.
    pub fn pool(&self) -> &sqlx::SqlitePool {
        &self.pool
    }

    /// Close every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
