//! Costwise API Server
//!
//! Main entry point for the Costwise backend service.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use costwise_api::{AppState, create_router};
use costwise_db::{ExpenseStore, MemoryStore, SeaOrmStore, connect_with, seed::default_users};
use costwise_shared::AppConfig;
use costwise_shared::config::StorageBackend;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "costwise=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load()?;

    let store: Arc<dyn ExpenseStore> = match config.database.backend {
        StorageBackend::Postgres => {
            let db = connect_with(&config.database).await?;
            info!("Connected to database");
            Arc::new(SeaOrmStore::new(db))
        }
        StorageBackend::Memory => {
            info!("Using in-memory store; data is lost on shutdown");
            Arc::new(MemoryStore::with_users(default_users()))
        }
    };

    let app = create_router(AppState::new(store, &config));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::warn!("Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
