//! PostgreSQL store built on the `SeaORM` repositories.

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, SqlErr};

use costwise_core::reports::MonthRange;
use costwise_core::{Category, Cost, NewCost, User};
use costwise_shared::types::{Amount, CostId, UserId};

use super::{ExpenseStore, StoreError};
use crate::entities::{costs, users};
use crate::repositories::{CostRepository, CreateCostInput, CreateUserInput, UserRepository};

/// Store backed by a PostgreSQL connection pool.
#[derive(Debug, Clone)]
pub struct SeaOrmStore {
    users: UserRepository,
    costs: CostRepository,
}

impl SeaOrmStore {
    /// Creates a store over an open connection.
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            users: UserRepository::new(db.clone()),
            costs: CostRepository::new(db),
        }
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: UserId(model.id),
        first_name: model.first_name,
        last_name: model.last_name,
        birthday: model.birthday,
        marital_status: model.marital_status,
    }
}

fn cost_from_model(model: costs::Model) -> Result<Cost, StoreError> {
    let category: Category = model.category.parse().map_err(|_| {
        StoreError::Corrupt(format!(
            "cost {} has category '{}'",
            model.id, model.category
        ))
    })?;
    let sum = Amount::new(model.sum)
        .ok_or_else(|| StoreError::Corrupt(format!("cost {} has non-positive sum", model.id)))?;

    Ok(Cost {
        id: CostId(model.id),
        description: model.description,
        category,
        user_id: UserId(model.userid),
        sum,
        created_at: model.created_at.with_timezone(&Utc),
    })
}

#[async_trait]
impl ExpenseStore for SeaOrmStore {
    async fn find_user(&self, id: UserId) -> Result<Option<User>, StoreError> {
        let model = self.users.find_by_id(id.into_inner()).await?;
        Ok(model.map(user_from_model))
    }

    async fn create_user(&self, user: User) -> Result<User, StoreError> {
        let input = CreateUserInput {
            id: user.id.into_inner(),
            first_name: user.first_name,
            last_name: user.last_name,
            birthday: user.birthday,
            marital_status: user.marital_status,
        };

        match self.users.create(input).await {
            Ok(model) => Ok(user_from_model(model)),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(StoreError::DuplicateUser(user.id))
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn insert_cost(&self, cost: NewCost) -> Result<Cost, StoreError> {
        let input = CreateCostInput {
            description: cost.description,
            category: cost.category.as_str().to_string(),
            userid: cost.user_id.into_inner(),
            sum: cost.sum.value(),
            created_at: cost.created_at,
        };

        let model = self.costs.create(input).await?;
        cost_from_model(model)
    }

    async fn costs_in_range(
        &self,
        user_id: UserId,
        range: &MonthRange,
    ) -> Result<Vec<Cost>, StoreError> {
        self.costs
            .find_for_user_between(user_id.into_inner(), range.start(), range.next_start())
            .await?
            .into_iter()
            .map(cost_from_model)
            .collect()
    }

    async fn total_for_user(&self, user_id: UserId) -> Result<Decimal, StoreError> {
        Ok(self.costs.total_for_user(user_id.into_inner()).await?)
    }
}
