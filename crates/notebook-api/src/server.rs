//! Listener startup for the two surfaces.

use std::net::SocketAddr;

use anyhow::Context;
use axum::Router;
use tracing::info;

use crate::{api_router, parse_allowed_origins, web_router, AppState, ServerConfig};

/// Bind `addr` and serve `app` until the listener fails.
pub async fn serve(name: &str, addr: &str, app: Router) -> anyhow::Result<()> {
    let addr: SocketAddr = addr
        .parse()
        .with_context(|| format!("invalid {} address '{}'", name, addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {} on {}", name, addr))?;
    info!(surface = name, %addr, "Listening");
    axum::serve(listener, app).await?;
    Ok(())
}

/// Serve the JSON API, and the form UI when enabled, until either listener stops.
pub async fn run(config: &ServerConfig, state: AppState) -> anyhow::Result<()> {
    let api = api_router(state.clone(), parse_allowed_origins(&config.allowed_origins));
    let api_addr = config.api_addr();

    if config.web_enabled {
        let web = web_router(state);
        let web_addr = config.web_addr();
        tokio::try_join!(serve("api", &api_addr, api), serve("web", &web_addr, web))?;
    } else {
        info!("Form UI disabled (WEB_ENABLED=false)");
        serve("api", &api_addr, api).await?;
    }

    Ok(())
}
