//! Category service - Handles category-related use cases.
//!
//! Orchestrates repository access via Unit of Work. Absent rows from the
//! repository surface here uniformly as `AppError::NotFound`.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Category, NewCategory};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// Category service trait for dependency injection.
#[async_trait]
pub trait CategoryService: Send + Sync {
    /// Create a category with the given name
    async fn create_category(&self, name: String) -> AppResult<Category>;

    /// Get category by ID
    async fn get_category(&self, id: i32) -> AppResult<Category>;

    /// List all categories
    async fn list_categories(&self) -> AppResult<Vec<Category>>;

    /// Rename an existing category
    async fn update_category(&self, id: i32, name: String) -> AppResult<Category>;

    /// Delete category by ID
    async fn delete_category(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of CategoryService using Unit of Work.
pub struct CategoryManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> CategoryManager<U> {
    /// Create new category service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> CategoryService for CategoryManager<U> {
    async fn create_category(&self, name: String) -> AppResult<Category> {
        let category = self.uow.categories().create(NewCategory::new(name)).await?;
        tracing::info!(id = category.id, "Category created");
        Ok(category)
    }

    async fn get_category(&self, id: i32) -> AppResult<Category> {
        self.uow.categories().get(id).await?.ok_or_not_found()
    }

    async fn list_categories(&self) -> AppResult<Vec<Category>> {
        self.uow.categories().get_all().await
    }

    async fn update_category(&self, id: i32, name: String) -> AppResult<Category> {
        self.uow
            .categories()
            .update(Category::new(id, name))
            .await?
            .ok_or_not_found()
    }

    async fn delete_category(&self, id: i32) -> AppResult<()> {
        if self.uow.categories().delete(id).await? {
            tracing::info!(id, "Category deleted");
            Ok(())
        } else {
            Err(AppError::NotFound)
        }
    }
}
