//! `SeaORM` entity definitions.

pub mod costs;
pub mod users;
