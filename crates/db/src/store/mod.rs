//! Storage seam between the HTTP layer and persistence.
//!
//! Handlers only see [`ExpenseStore`]. [`SeaOrmStore`] backs it with
//! PostgreSQL through the repositories; [`MemoryStore`] keeps everything in
//! process and is used for development and tests.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::SeaOrmStore;

use async_trait::async_trait;
use rust_decimal::Decimal;
use sea_orm::DbErr;
use thiserror::Error;

use costwise_core::reports::MonthRange;
use costwise_core::{Cost, NewCost, User};
use costwise_shared::AppError;
use costwise_shared::types::UserId;

/// Errors raised by a store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying database failure.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    /// A user with this id already exists.
    #[error("User {0} already exists")]
    DuplicateUser(UserId),

    /// A stored row could not be mapped back to a domain value.
    #[error("Corrupt record: {0}")]
    Corrupt(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateUser(_) => Self::Conflict(err.to_string()),
            StoreError::Database(_) | StoreError::Corrupt(_) => Self::Database(err.to_string()),
        }
    }
}

/// Persistence operations needed by the service.
#[async_trait]
pub trait ExpenseStore: Send + Sync {
    /// Looks a user up by id.
    async fn find_user(&self, id: UserId) -> Result<Option<User>, StoreError>;

    /// Creates a user. Fails with [`StoreError::DuplicateUser`] if the id is taken.
    async fn create_user(&self, user: User) -> Result<User, StoreError>;

    /// Persists a validated cost and returns it with its assigned id.
    async fn insert_cost(&self, cost: NewCost) -> Result<Cost, StoreError>;

    /// Costs of `user_id` created within `range`, ordered by `created_at`
    /// then id.
    async fn costs_in_range(
        &self,
        user_id: UserId,
        range: &MonthRange,
    ) -> Result<Vec<Cost>, StoreError>;

    /// Sum of all costs of `user_id`, zero if there are none.
    async fn total_for_user(&self, user_id: UserId) -> Result<Decimal, StoreError>;
}
