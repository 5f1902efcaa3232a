//! Domain models and wire types shared by the store, the HTTP surfaces, and the dashboard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// =============================================================================
// ENTITIES
// =============================================================================

/// A note together with every comment attached to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub date_created: DateTime<Utc>,
    /// Comments in creation order.
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// A comment owned by exactly one note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Comment {
    pub id: i64,
    pub note_id: i64,
    pub content: String,
    pub date_created: DateTime<Utc>,
}

// =============================================================================
// REQUESTS
// =============================================================================

/// Request for creating a new note.
#[derive(Debug, Clone, Default)]
pub struct CreateNoteRequest {
    pub title: String,
    pub content: String,
}

impl CreateNoteRequest {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Both fields are required and must contain something besides whitespace.
    pub fn validate(&self) -> Result<()> {
        require("title", &self.title)?;
        require("content", &self.content)
    }
}

/// Request for attaching a comment to a note.
#[derive(Debug, Clone)]
pub struct CreateCommentRequest {
    pub note_id: i64,
    pub content: String,
}

impl CreateCommentRequest {
    pub fn new(note_id: i64, content: impl Into<String>) -> Self {
        Self {
            note_id,
            content: content.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("content", &self.content)
    }
}

fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::InvalidInput(format!("{} is required", field)));
    }
    Ok(())
}

// =============================================================================
// RESPONSES
// =============================================================================

/// Response body for a created note.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct NoteCreated {
    pub message: String,
    pub id: i64,
}

impl NoteCreated {
    pub fn for_note(note: &Note) -> Self {
        Self {
            message: format!("Note '{}' added successfully!", note.title),
            id: note.id,
        }
    }
}

/// Response body for a deleted note.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct NoteDeleted {
    pub message: String,
}

impl NoteDeleted {
    pub fn for_note(note: &Note) -> Self {
        Self {
            message: format!("Note '{}' and its comments deleted!", note.title),
        }
    }
}

/// Response body for a created comment.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CommentCreated {
    pub message: String,
    pub comment_id: i64,
}

impl CommentCreated {
    pub fn for_comment(comment: &Comment) -> Self {
        Self {
            message: "Comment added successfully!".to_string(),
            comment_id: comment.id,
        }
    }
}

/// Error body returned by the JSON surface for every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorBody {
    pub detail: String,
}
