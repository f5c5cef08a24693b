//! Cost repository for database operations.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use tracing::debug;

use crate::entities::costs;

/// Input for inserting a cost.
#[derive(Debug, Clone)]
pub struct CreateCostInput {
    /// Free-text description.
    pub description: String,
    /// Category name, one of the five allowed values.
    pub category: String,
    /// Owning user id.
    pub userid: i64,
    /// Amount spent, strictly positive.
    pub sum: Decimal,
    /// When the expense happened.
    pub created_at: DateTime<Utc>,
}

/// Cost repository.
#[derive(Debug, Clone)]
pub struct CostRepository {
    db: DatabaseConnection,
}

impl CostRepository {
    /// Creates a new cost repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a cost and returns the stored row with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(&self, input: CreateCostInput) -> Result<costs::Model, DbErr> {
        debug!(
            user_id = input.userid,
            category = %input.category,
            "inserting cost"
        );

        let cost = costs::ActiveModel {
            id: NotSet,
            description: Set(input.description),
            category: Set(input.category),
            userid: Set(input.userid),
            sum: Set(input.sum),
            created_at: Set(input.created_at.into()),
        };

        cost.insert(&self.db).await
    }

    /// Lists a user's costs with `created_at` in `[start, end)`, oldest first.
    ///
    /// Ties on `created_at` are broken by id, so the order is stable.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_for_user_between(
        &self,
        userid: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<costs::Model>, DbErr> {
        costs::Entity::find()
            .filter(costs::Column::Userid.eq(userid))
            .filter(costs::Column::CreatedAt.gte(start))
            .filter(costs::Column::CreatedAt.lt(end))
            .order_by_asc(costs::Column::CreatedAt)
            .order_by_asc(costs::Column::Id)
            .all(&self.db)
            .await
    }

    /// Sums every cost of a user. Returns zero when the user has none.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn total_for_user(&self, userid: i64) -> Result<Decimal, DbErr> {
        let total: Option<Option<Decimal>> = costs::Entity::find()
            .select_only()
            .column_as(costs::Column::Sum.sum(), "total")
            .filter(costs::Column::Userid.eq(userid))
            .into_tuple()
            .one(&self.db)
            .await?;

        Ok(total.flatten().unwrap_or(Decimal::ZERO))
    }
}
