//! Database seeder for Costwise development and testing.
//!
//! Inserts the default users into the configured PostgreSQL database. Users
//! that already exist are left untouched, so the seeder can be re-run.
//!
//! Usage: cargo run --bin seeder

use anyhow::Context;
use costwise_db::{ExpenseStore, SeaOrmStore, StoreError, connect_with, seed::default_users};
use costwise_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    println!("Connecting to database...");
    let db = connect_with(&config.database)
        .await
        .context("Failed to connect to database")?;
    let store = SeaOrmStore::new(db);

    println!("Seeding users...");
    for user in default_users() {
        let id = user.id;
        match store.create_user(user).await {
            Ok(created) => println!(
                "  Created user {} ({} {})",
                created.id, created.first_name, created.last_name
            ),
            Err(StoreError::DuplicateUser(_)) => {
                println!("  User {id} already exists, skipping...");
            }
            Err(err) => return Err(err).context("Failed to seed user"),
        }
    }

    println!("Seeding complete!");
    Ok(())
}
