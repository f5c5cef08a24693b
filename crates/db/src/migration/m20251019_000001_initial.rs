//! Initial database migration.
//!
//! Creates the users and costs tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(USERS_SQL).await?;
        db.execute_unprepared(COSTS_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared("DROP TABLE IF EXISTS costs CASCADE;")
            .await?;
        db.execute_unprepared("DROP TABLE IF EXISTS users CASCADE;")
            .await?;
        Ok(())
    }
}

const USERS_SQL: &str = r"
-- Users are created by the seeder; ids are chosen by the caller
CREATE TABLE users (
    id BIGINT PRIMARY KEY,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    birthday TEXT NOT NULL,
    marital_status TEXT NOT NULL
);
";

const COSTS_SQL: &str = r"
-- Cost items; userid is not a foreign key
CREATE TABLE costs (
    id BIGSERIAL PRIMARY KEY,
    description TEXT NOT NULL,
    category TEXT NOT NULL,
    userid BIGINT NOT NULL,
    sum NUMERIC NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_costs_category CHECK (
        category IN ('food', 'health', 'housing', 'sport', 'education')
    ),
    CONSTRAINT chk_costs_sum_positive CHECK (sum > 0)
);

-- Monthly reports scan one user's costs by date
CREATE INDEX idx_costs_user_created ON costs(userid, created_at, id);
";
