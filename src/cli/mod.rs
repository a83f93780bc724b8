//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `migrate` - Database migrations
//! - `category` - Category maintenance

pub mod args;

pub use args::{Cli, Commands};
