//! Form UI handlers.
//!
//! Successful submissions redirect back to `/` (303 See Other). Rejected ones
//! re-render the page with an error banner and the status the JSON surface
//! would have used.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;
use tracing::debug;

use notebook_core::{CreateCommentRequest, CreateNoteRequest, NoteRepository};

use crate::render::{render_home, PageContext};
use crate::{ApiError, AppState};

#[derive(Debug, Deserialize)]
pub struct AddNoteForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct AddCommentForm {
    #[serde(default)]
    pub comment_content: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub query: String,
}

/// Home page: every note with its comments and the forms.
pub async fn home(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let notes = state.db.notes.list_notes().await?;
    Ok(Html(render_home(&notes, &PageContext::default())))
}

pub async fn add_note(State(state): State<AppState>, Form(form): Form<AddNoteForm>) -> Response {
    let result = state
        .db
        .notes
        .create_note(CreateNoteRequest::new(form.title, form.content))
        .await;

    match result {
        Ok(_) => Redirect::to("/").into_response(),
        Err(err) => page_with_error(&state, err.into()).await,
    }
}

pub async fn delete_note(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match state.db.notes.delete_note(id).await {
        Ok(_) => Redirect::to("/").into_response(),
        Err(err) => page_with_error(&state, err.into()).await,
    }
}

pub async fn add_comment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<AddCommentForm>,
) -> Response {
    let result = state
        .db
        .notes
        .add_comment(CreateCommentRequest::new(id, form.comment_content))
        .await;

    match result {
        Ok(_) => Redirect::to("/").into_response(),
        Err(err) => page_with_error(&state, err.into()).await,
    }
}

/// Home page plus a "Search Results" section for the trimmed query.
pub async fn search(
    State(state): State<AppState>,
    Query(form): Query<SearchForm>,
) -> Result<Html<String>, ApiError> {
    let query = form.query.trim();
    let hits = state.db.notes.search(query).await?;
    let notes = state.db.notes.list_notes().await?;

    let ctx = PageContext {
        error: None,
        search: Some((query, hits.as_slice())),
    };
    Ok(Html(render_home(&notes, &ctx)))
}

/// Re-render the home page with a banner for `err`.
///
/// Falls back to the JSON error body if the note list itself cannot be loaded.
async fn page_with_error(state: &AppState, err: ApiError) -> Response {
    let status: StatusCode = err.status();
    let message = err.message();
    debug!(
        subsystem = "web",
        status = status.as_u16(),
        error = %message,
        "Form submission rejected"
    );

    match state.db.notes.list_notes().await {
        Ok(notes) => {
            let ctx = PageContext {
                error: Some(&message),
                search: None,
            };
            (status, Html(render_home(&notes, &ctx))).into_response()
        }
        Err(list_err) => ApiError::from(list_err).into_response(),
    }
}
