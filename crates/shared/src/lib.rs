//! Shared types, errors, and configuration for Costwise.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for users and cost records
//! - A positive `Amount` type with decimal precision
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
