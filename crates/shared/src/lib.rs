//! Shared configuration and error types for Spendtrack.
//!
//! This crate provides the pieces every other crate leans on:
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;

pub use config::{AppConfig, BudgetConfig, ServerConfig};
pub use error::{AppError, AppResult};
