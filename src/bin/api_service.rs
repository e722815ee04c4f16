//! API service binary

use anyhow::Context;

use msgrelay::api::{create_router, ApiState};
use msgrelay::config::ApiConfig;
use msgrelay::logging::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::load().context("failed to load configuration")?;

    init_tracing(&config.logging)?;

    tracing::info!(downstream_url = %config.downstream_url, "Starting API service");

    let state = ApiState::new(config.downstream_url.clone())?;
    let router = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;
    tracing::info!(%addr, "Listening for HTTP traffic");

    axum::serve(listener, router).await?;

    Ok(())
}
