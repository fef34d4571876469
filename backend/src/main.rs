//! Book search HTTP server.

use std::sync::Arc;

use anyhow::Context;
use booksearch::{BookSearch, ElasticsearchTransport, config::SearchConfig, server_extra};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = SearchConfig::from_env()?;
    let transport = ElasticsearchTransport::from_config(&config).context("Failed to create search engine client")?;
    tracing::info!("Searching index {} at {}", config.index_name, transport.search_url());

    let app = server_extra::router(Arc::new(BookSearch::new(transport)));
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?;
    tracing::info!("Listening on {}", config.listen_addr);

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {:#?}", e);
    }
}
