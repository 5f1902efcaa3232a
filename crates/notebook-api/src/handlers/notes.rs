//! JSON handlers for notes, comments, and search.
//!
//! Inputs arrive as query parameters. Missing parameters and unparseable note
//! ids are reported as a 400 with the usual `{"detail"}` body instead of axum's
//! plain-text rejection.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use utoipa::IntoParams;

use notebook_core::{
    CommentCreated, CreateCommentRequest, CreateNoteRequest, Note, NoteCreated, NoteDeleted,
    NoteRepository,
};

use crate::{ApiError, AppState};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CreateNoteParams {
    /// Unique note title.
    pub title: Option<String>,
    /// Note body.
    pub content: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AddCommentParams {
    /// Comment text.
    pub content: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Case-sensitive substring matched against titles, contents, and comments.
    pub query: Option<String>,
}

fn required(value: Option<String>, field: &str) -> Result<String, ApiError> {
    value.ok_or_else(|| ApiError::BadRequest(format!("{} is required", field)))
}

fn note_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    let Path(id) = path?;
    Ok(id)
}

/// Create a note.
#[utoipa::path(post, path = "/notes/", tag = "Notes",
    params(CreateNoteParams),
    responses(
        (status = 200, description = "Note created", body = NoteCreated),
        (status = 400, description = "Duplicate title or missing field", body = ErrorBody),
    )
)]
pub async fn create_note(
    State(state): State<AppState>,
    Query(params): Query<CreateNoteParams>,
) -> Result<Json<NoteCreated>, ApiError> {
    let title = required(params.title, "title")?;
    let content = required(params.content, "content")?;

    let note = state
        .db
        .notes
        .create_note(CreateNoteRequest::new(title, content))
        .await?;

    Ok(Json(NoteCreated::for_note(&note)))
}

/// List every note with its comments, in id order.
#[utoipa::path(get, path = "/notes/", tag = "Notes",
    responses(
        (status = 200, description = "All notes", body = [Note]),
    )
)]
pub async fn list_notes(State(state): State<AppState>) -> Result<Json<Vec<Note>>, ApiError> {
    let notes = state.db.notes.list_notes().await?;
    Ok(Json(notes))
}

/// Fetch one note with its comments.
#[utoipa::path(get, path = "/notes/{id}", tag = "Notes",
    params(("id" = i64, Path, description = "Note id")),
    responses(
        (status = 200, description = "The note", body = Note),
        (status = 400, description = "Invalid note id", body = ErrorBody),
        (status = 404, description = "Note not found", body = ErrorBody),
    )
)]
pub async fn get_note(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Note>, ApiError> {
    let id = note_id(path)?;
    let note = state.db.notes.get_note(id).await?;
    Ok(Json(note))
}

/// Delete a note and every comment on it.
#[utoipa::path(delete, path = "/notes/{id}", tag = "Notes",
    params(("id" = i64, Path, description = "Note id")),
    responses(
        (status = 200, description = "Note deleted", body = NoteDeleted),
        (status = 404, description = "Note not found", body = ErrorBody),
    )
)]
pub async fn delete_note(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<NoteDeleted>, ApiError> {
    let id = note_id(path)?;
    let note = state.db.notes.delete_note(id).await?;
    Ok(Json(NoteDeleted::for_note(&note)))
}

/// Attach a comment to a note.
#[utoipa::path(post, path = "/notes/{id}/comments", tag = "Comments",
    params(("id" = i64, Path, description = "Note id"), AddCommentParams),
    responses(
        (status = 200, description = "Comment added", body = CommentCreated),
        (status = 400, description = "Missing content", body = ErrorBody),
        (status = 404, description = "Note not found", body = ErrorBody),
    )
)]
pub async fn add_comment(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    Query(params): Query<AddCommentParams>,
) -> Result<Json<CommentCreated>, ApiError> {
    let id = note_id(path)?;
    let content = required(params.content, "content")?;

    let comment = state
        .db
        .notes
        .add_comment(CreateCommentRequest::new(id, content))
        .await?;

    Ok(Json(CommentCreated::for_comment(&comment)))
}

/// Search notes by substring.
#[utoipa::path(get, path = "/search/", tag = "Search",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching notes with full comment sets", body = [Note]),
        (status = 400, description = "Missing query", body = ErrorBody),
    )
)]
pub async fn search_notes(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Note>>, ApiError> {
    let query = required(params.query, "query")?;
    let notes = state.db.notes.search(&query).await?;
    Ok(Json(notes))
}
