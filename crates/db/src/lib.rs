//! Database layer with `SeaORM` entities and repositories.
//!
//! This crate provides:
//! - `SeaORM` entity definitions
//! - Repository abstractions for data access
//! - Database migrations
//! - The `ExpenseStore` seam used by the HTTP layer, with a PostgreSQL and an
//!   in-memory implementation

pub mod entities;
pub mod migration;
pub mod repositories;
pub mod seed;
pub mod store;

pub use repositories::{CostRepository, UserRepository};
pub use store::{ExpenseStore, MemoryStore, SeaOrmStore, StoreError};

use costwise_shared::config::DatabaseConfig;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Establishes a connection to the database.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    Database::connect(database_url).await
}

/// Establishes a pooled connection using the configured pool bounds.
///
/// # Errors
///
/// Returns an error if no URL is configured or the connection fails.
pub async fn connect_with(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let url = config
        .require_url()
        .map_err(|e| DbErr::Custom(e.to_string()))?;

    let mut options = ConnectOptions::new(url.to_owned());
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .sqlx_logging(false);

    Database::connect(options).await
}
