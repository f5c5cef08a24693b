//! In-process store.

use std::collections::BTreeMap;

use async_trait::async_trait;
use rust_decimal::Decimal;
use tokio::sync::RwLock;

use costwise_core::reports::MonthRange;
use costwise_core::{Cost, NewCost, User};
use costwise_shared::types::{CostId, UserId};

use super::{ExpenseStore, StoreError};

#[derive(Debug, Default)]
struct Inner {
    users: BTreeMap<UserId, User>,
    costs: Vec<Cost>,
    next_cost_id: i64,
}

/// Store that keeps users and costs in memory. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `users`. Later duplicates replace
    /// earlier ones.
    #[must_use]
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let users = users.into_iter().map(|u| (u.id, u)).collect();
        Self {
            inner: RwLock::new(Inner {
                users,
                ..Inner::default()
            }),
        }
    }
}

#[async_trait]
impl ExpenseStore for MemoryStore {
    async fn find_user(&self, id: UserId) -> Result<Option<User>, StoreError> {
        Ok(self.inner.read().await.users.get(&id).cloned())
    }

    async fn create_user(&self, user: User) -> Result<User, StoreError> {
        let mut inner = self.inner.write().await;
        if inner.users.contains_key(&user.id) {
            return Err(StoreError::DuplicateUser(user.id));
        }
        inner.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn insert_cost(&self, cost: NewCost) -> Result<Cost, StoreError> {
        let mut inner = self.inner.write().await;
        inner.next_cost_id += 1;
        let cost = Cost::from_new(CostId(inner.next_cost_id), cost);
        inner.costs.push(cost.clone());
        Ok(cost)
    }

    async fn costs_in_range(
        &self,
        user_id: UserId,
        range: &MonthRange,
    ) -> Result<Vec<Cost>, StoreError> {
        let inner = self.inner.read().await;
        let mut found: Vec<Cost> = inner
            .costs
            .iter()
            .filter(|c| c.user_id == user_id && range.contains(c.created_at))
            .cloned()
            .collect();
        found.sort_by_key(|c| (c.created_at, c.id));
        Ok(found)
    }

    async fn total_for_user(&self, user_id: UserId) -> Result<Decimal, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .costs
            .iter()
            .filter(|c| c.user_id == user_id)
            .map(|c| c.sum.value())
            .sum())
    }
}
