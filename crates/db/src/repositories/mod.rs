//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod cost;
pub mod user;

pub use cost::{CostRepository, CreateCostInput};
pub use user::{CreateUserInput, UserRepository};
