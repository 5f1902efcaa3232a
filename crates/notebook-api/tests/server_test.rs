//! Startup of the API and form listeners from a `ServerConfig`.

use std::time::Duration;

use notebook_api::{server, AppState, ServerConfig};
use notebook_db::Database;

async fn state(dir: &tempfile::TempDir) -> AppState {
    let url = format!("sqlite://{}", dir.path().join("notes.db").display());
    AppState::new(Database::connect(&url).await.unwrap())
}

#[tokio::test]
async fn test_run_rejects_invalid_host() {
    let dir = tempfile::tempdir().unwrap();
    let config = ServerConfig {
        host: "not a host".to_string(),
        ..ServerConfig::default()
    };

    let err = server::run(&config, state(&dir).await).await.unwrap_err();
    assert!(err.to_string().contains("address 'not a host:"), "{err:#}");
}

#[tokio::test]
async fn test_run_fails_when_web_port_taken() {
    let dir = tempfile::tempdir().unwrap();
    let taken = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        web_port: taken.local_addr().unwrap().port(),
        web_enabled: true,
        ..ServerConfig::default()
    };

    let result = tokio::time::timeout(
        Duration::from_secs(5),
        server::run(&config, state(&dir).await),
    )
    .await
    .expect("run should stop once the web listener fails");

    let err = result.unwrap_err();
    assert!(err.to_string().contains("failed to bind web"), "{err:#}");
}

#[tokio::test]
async fn test_run_skips_web_listener_when_disabled() {
    let dir = tempfile::tempdir().unwrap();
    let taken = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        web_port: taken.local_addr().unwrap().port(),
        web_enabled: false,
        ..ServerConfig::default()
    };

    // Still serving the API after the deadline means the taken web port was never bound.
    let outcome = tokio::time::timeout(
        Duration::from_millis(300),
        server::run(&config, state(&dir).await),
    )
    .await;
    assert!(outcome.is_err());
}
