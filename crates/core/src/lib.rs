//! Core business logic for Costwise.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `category` - The closed set of expense categories
//! - `cost` - Cost records and ingestion validation
//! - `reports` - Monthly per-category reports
//! - `users` - User profiles and spending summaries
//! - `input` - Coercion of loosely typed request values

pub mod category;
pub mod cost;
pub mod input;
pub mod reports;
pub mod users;

pub use category::Category;
pub use cost::{Cost, CostDraft, CostValidationError, NewCost};
pub use users::{User, UserLookupError, UserSummary};
