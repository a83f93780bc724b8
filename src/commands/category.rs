//! Category command - Category maintenance from the command line.

use std::sync::Arc;

use serde::Serialize;

use crate::cli::args::{CategoryAction, CategoryArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::{Database, Persistence};
use crate::services::{CategoryManager, CategoryService};

/// Execute the category command
pub async fn execute(args: CategoryArgs, config: Config) -> AppResult<()> {
    let db = Database::connect(&config)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    // One unit of work per invocation
    let uow = Arc::new(Persistence::new(db.get_connection()));
    let service = CategoryManager::new(uow);

    let output = run(args.action, &service).await?;
    println!("{}", output);
    Ok(())
}

/// Perform a category action and render its result as JSON.
pub async fn run<S>(action: CategoryAction, service: &S) -> AppResult<String>
where
    S: CategoryService + ?Sized,
{
    match action {
        CategoryAction::List => render(&service.list_categories().await?),
        CategoryAction::Get { id } => render(&service.get_category(id).await?),
        CategoryAction::Create { name } => render(&service.create_category(name).await?),
        CategoryAction::Update { id, name } => {
            render(&service.update_category(id, name).await?)
        }
        CategoryAction::Delete { id } => {
            service.delete_category(id).await?;
            render(&serde_json::json!({ "deleted": id }))
        }
    }
}

fn render<T: Serialize + ?Sized>(value: &T) -> AppResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| AppError::internal(format!("Failed to render output: {}", e)))
}
