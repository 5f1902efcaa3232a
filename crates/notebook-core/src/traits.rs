//! Core traits for notebook abstractions.
//!
//! The [`NoteRepository`] trait is the single note service contract; the JSON
//! API and the HTML form surface are thin adapters over it.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::*;

/// Repository for note and comment operations.
///
/// Every method runs in its own transaction and releases its connection
/// before returning.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Create a note. Fails with `Conflict` when the title is already taken.
    async fn create_note(&self, req: CreateNoteRequest) -> Result<Note>;

    /// All notes in id order, with comments attached.
    async fn list_notes(&self) -> Result<Vec<Note>>;

    /// Fetch one note with its comments.
    async fn get_note(&self, id: i64) -> Result<Note>;

    /// Delete a note and all of its comments. Returns the note as it was.
    async fn delete_note(&self, id: i64) -> Result<Note>;

    /// Attach a comment to an existing note.
    async fn add_comment(&self, req: CreateCommentRequest) -> Result<Comment>;

    /// Notes whose title, content, or any comment contains `query`
    /// (case-sensitive substring), deduplicated, in id order.
    async fn search(&self, query: &str) -> Result<Vec<Note>>;

    /// Check if a note exists.
    async fn exists(&self, id: i64) -> Result<bool>;

    /// Number of stored notes.
    async fn count_notes(&self) -> Result<i64>;
}
