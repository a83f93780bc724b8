//! YumBlazor data layer - Category persistence
//!
//! This crate provides the data-access layer for menu categories:
//! schema migrations (identity tables, categories, seed rows), a
//! repository abstraction with SeaORM and in-memory implementations,
//! and a thin service layer on top.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities
//! - **services**: Application use cases
//! - **infra**: Database, migrations, repositories and unit of work
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Run migrations (creates and seeds the schema on first run)
//! cargo run -- migrate up
//!
//! # List categories
//! cargo run -- category list
//!
//! # Rename a category
//! cargo run -- category update 3 Pudding
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use config::Config;
pub use domain::{Category, NewCategory};
pub use errors::{AppError, AppResult};
pub use infra::{CategoryRepository, Database, Persistence, UnitOfWork};
