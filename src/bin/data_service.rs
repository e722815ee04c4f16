//! Data service binary

use std::sync::Arc;

use anyhow::Context;

use msgrelay::config::DataConfig;
use msgrelay::data::{create_router, DataState};
use msgrelay::logging::init_tracing;
use msgrelay::store::{MessageStore, PgMessageStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = DataConfig::load().context("failed to load configuration")?;

    init_tracing(&config.logging)?;

    // Fail fast when DB_USER or DB_PASSWORD is absent
    let db = config.db.to_runtime().context("invalid database configuration")?;
    tracing::info!(db_host = %db.host, db_name = %db.name, "Starting data service");

    let store: Arc<dyn MessageStore> = Arc::new(PgMessageStore::new(&db));
    let router = create_router(DataState::new(store));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;
    tracing::info!(%addr, "Listening for HTTP traffic");

    axum::serve(listener, router).await?;

    Ok(())
}
