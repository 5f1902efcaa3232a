//! HTTP error mapping shared by both surfaces.

use axum::extract::rejection::PathRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use notebook_core::defaults::{DUPLICATE_TITLE_MSG, NOTE_NOT_FOUND_MSG};
use notebook_core::ErrorBody;

#[derive(Debug)]
pub enum ApiError {
    Database(notebook_core::Error),
    NotFound(String),
    BadRequest(String),
    Conflict(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            // Duplicate titles are reported as a plain bad request.
            ApiError::BadRequest(_) | ApiError::Conflict(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ApiError::Database(err) => err.to_string(),
            ApiError::NotFound(msg) | ApiError::BadRequest(msg) | ApiError::Conflict(msg) => {
                msg.clone()
            }
        }
    }
}

impl From<notebook_core::Error> for ApiError {
    fn from(err: notebook_core::Error) -> Self {
        match &err {
            notebook_core::Error::NoteNotFound(_) => {
                ApiError::NotFound(NOTE_NOT_FOUND_MSG.to_string())
            }
            notebook_core::Error::NotFound(msg) => ApiError::NotFound(msg.clone()),
            notebook_core::Error::InvalidInput(msg) => ApiError::BadRequest(msg.clone()),
            notebook_core::Error::Conflict(msg) => ApiError::Conflict(msg.clone()),
            notebook_core::Error::Database(sqlx::Error::Database(db_err))
                if db_err.is_unique_violation() =>
            {
                ApiError::Conflict(DUPLICATE_TITLE_MSG.to_string())
            }
            _ => ApiError::Database(err),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if let ApiError::Database(err) = &self {
            tracing::error!(subsystem = "api", error = %err, "Request failed");
        }

        let body = Json(ErrorBody {
            detail: self.message(),
        });

        (status, body).into_response()
    }
}
