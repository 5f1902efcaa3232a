//! # notebook-api
//!
//! HTTP front-ends for the notebook service:
//! - a JSON API ([`api_router`]) used by the dashboard and other clients
//! - an HTML form UI ([`web_router`]) for browsers
//!
//! Both routers share one [`AppState`] and go through the same
//! [`notebook_core::NoteRepository`].

pub mod config;
pub mod error;
pub mod handlers;
pub mod render;
pub mod server;

use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use uuid::Uuid;

use notebook_db::Database;

pub use config::{parse_allowed_origins, ServerConfig};
pub use error::ApiError;

// =============================================================================
// REQUEST ID (UUIDv7)
// =============================================================================

/// Generates time-ordered UUIDv7 request correlation IDs.
#[derive(Clone, Default)]
pub struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}

// =============================================================================
// STATE & OPENAPI
// =============================================================================

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Notebook API",
        description = "Notes with comments and substring search"
    ),
    paths(
        handlers::notes::create_note,
        handlers::notes::list_notes,
        handlers::notes::get_note,
        handlers::notes::delete_note,
        handlers::notes::add_comment,
        handlers::notes::search_notes,
        handlers::system::health,
    ),
    components(schemas(
        notebook_core::Note,
        notebook_core::Comment,
        notebook_core::NoteCreated,
        notebook_core::NoteDeleted,
        notebook_core::CommentCreated,
        notebook_core::ErrorBody,
        handlers::system::HealthResponse,
    )),
    tags(
        (name = "Notes", description = "Note CRUD operations"),
        (name = "Comments", description = "Comments on notes"),
        (name = "Search", description = "Substring search"),
        (name = "System", description = "Health checks and API description")
    )
)]
pub struct ApiDoc;

// =============================================================================
// ROUTERS
// =============================================================================

/// The JSON surface. Note and search paths answer with or without a trailing slash.
pub fn api_router(state: AppState, allowed_origins: Vec<HeaderValue>) -> Router {
    use handlers::{notes, system};

    Router::new()
        .route("/health", get(system::health))
        .route("/openapi.json", get(system::openapi_json))
        .route("/notes", get(notes::list_notes).post(notes::create_note))
        .route("/notes/", get(notes::list_notes).post(notes::create_note))
        .route("/notes/:id", get(notes::get_note).delete(notes::delete_note))
        .route("/notes/:id/", get(notes::get_note).delete(notes::delete_note))
        .route("/notes/:id/comments", post(notes::add_comment))
        .route("/notes/:id/comments/", post(notes::add_comment))
        .route("/search", get(notes::search_notes))
        .route("/search/", get(notes::search_notes))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
        .layer(
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(allowed_origins))
                .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
                .max_age(std::time::Duration::from_secs(3600)),
        )
        .with_state(state)
}

/// The HTML form surface.
pub fn web_router(state: AppState) -> Router {
    use handlers::web;

    Router::new()
        .route("/", get(web::home))
        .route("/add_note", post(web::add_note))
        .route("/delete_note/:id", post(web::delete_note))
        .route("/add_comment/:id", post(web::add_comment))
        .route("/search", get(web::search))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
        .with_state(state)
}
