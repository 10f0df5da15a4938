//! Catalog server: loads settings from the environment (and `.env`), opens the JSON
//! data file and serves the product routes.
//!
//! Run from repo root: `cargo run -p catalog-server`

use product_catalog::{app, AppState, CatalogStore, JsonFileStorage, Settings, ENDPOINTS};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("product_catalog=info,catalog_server=info,tower_http=info")
            }),
        )
        .init();

    let settings = Settings::from_env()?;
    let storage = JsonFileStorage::new(settings.data_path.clone());
    tracing::info!(path = %storage.path().display(), "opening catalog");
    let catalog = CatalogStore::load(Arc::new(storage)).await?;

    let listener = TcpListener::bind(settings.addr()).await?;
    let addr = listener.local_addr()?;
    let state = AppState::new(catalog, settings);

    tracing::info!("REST API server running on http://{}", addr);
    for e in ENDPOINTS {
        tracing::info!("  {:<6} {:<21} {}", e.method, e.path, e.about);
    }

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
