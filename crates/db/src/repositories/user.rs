//! User repository for database operations.

use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use tracing::debug;

use crate::entities::users;

/// Input for creating a user.
#[derive(Debug, Clone)]
pub struct CreateUserInput {
    /// Caller-chosen id.
    pub id: i64,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Birthday as entered.
    pub birthday: String,
    /// Marital status as entered.
    pub marital_status: String,
}

/// User repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    /// Creates a new user repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a user by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<users::Model>, DbErr> {
        users::Entity::find_by_id(id).one(&self.db).await
    }

    /// Creates a new user.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails, including when the id
    /// is already taken.
    pub async fn create(&self, input: CreateUserInput) -> Result<users::Model, DbErr> {
        debug!(user_id = input.id, "inserting user");

        let user = users::ActiveModel {
            id: Set(input.id),
            first_name: Set(input.first_name),
            last_name: Set(input.last_name),
            birthday: Set(input.birthday),
            marital_status: Set(input.marital_status),
        };

        user.insert(&self.db).await
    }
}
