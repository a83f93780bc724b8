//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

/// YumBlazor data tool - schema migrations and category maintenance
#[derive(Parser, Debug)]
#[command(name = "yum-data")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Database URL (overrides DATABASE_URL from the environment)
    #[arg(long, global = true)]
    pub database_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run database migrations
    Migrate(MigrateArgs),

    /// Manage categories
    Category(CategoryArgs),
}

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

/// Migration actions
#[derive(Subcommand, Debug)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset and re-run all migrations
    Fresh,
}

/// Arguments for the category command
#[derive(Parser, Debug)]
pub struct CategoryArgs {
    #[command(subcommand)]
    pub action: CategoryAction,
}

/// Category actions
#[derive(Subcommand, Debug)]
pub enum CategoryAction {
    /// List all categories
    List,
    /// Show one category
    Get {
        /// Category id
        id: i32,
    },
    /// Create a category
    Create {
        /// Category name (e.g., "Soup")
        name: String,
    },
    /// Rename a category
    Update {
        /// Category id
        id: i32,
        /// New name
        name: String,
    },
    /// Delete a category
    Delete {
        /// Category id
        id: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_category_update() {
        let cli = Cli::parse_from(["yum-data", "category", "update", "3", "Pudding"]);

        match cli.command {
            Commands::Category(CategoryArgs {
                action: CategoryAction::Update { id, name },
            }) => {
                assert_eq!(id, 3);
                assert_eq!(name, "Pudding");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "yum-data",
            "migrate",
            "status",
            "--verbose",
            "--database-url",
            "sqlite::memory:",
        ]);

        assert!(cli.verbose);
        assert_eq!(cli.database_url.as_deref(), Some("sqlite::memory:"));
        assert!(matches!(
            cli.command,
            Commands::Migrate(MigrateArgs {
                action: MigrateAction::Status
            })
        ));
    }

    #[test]
    fn rejects_non_numeric_id() {
        assert!(Cli::try_parse_from(["yum-data", "category", "get", "abc"]).is_err());
    }
}
