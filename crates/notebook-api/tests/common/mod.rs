//! Test servers for the HTTP integration tests.
//!
//! Each test gets a fresh SQLite file and both routers bound to ephemeral
//! ports on 127.0.0.1.

#![allow(dead_code)]

use std::net::SocketAddr;

use notebook_api::{api_router, parse_allowed_origins, web_router, AppState};
use notebook_db::Database;
use tempfile::TempDir;

pub struct TestServer {
    pub api_url: String,
    pub web_url: String,
    pub db: Database,
    _dir: TempDir,
}

async fn spawn(app: axum::Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("No local address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server crashed");
    });
    addr
}

impl TestServer {
    pub async fn start() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let url = format!("sqlite://{}", dir.path().join("notes.db").display());
        let db = Database::connect(&url)
            .await
            .expect("Failed to open test database");

        let state = AppState::new(db.clone());
        let api = spawn(api_router(
            state.clone(),
            parse_allowed_origins("http://localhost:5000"),
        ))
        .await;
        let web = spawn(web_router(state)).await;

        Self {
            api_url: format!("http://{}", api),
            web_url: format!("http://{}", web),
            db,
            _dir: dir,
        }
    }

    pub fn api(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    pub fn web(&self, path: &str) -> String {
        format!("{}{}", self.web_url, path)
    }
}

/// A client that reports redirects instead of following them.
pub fn no_redirect_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to build client")
}
