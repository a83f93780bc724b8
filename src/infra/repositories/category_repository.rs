//! Category repository implementation backed by SeaORM.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use super::entities::category::{self, ActiveModel, Entity as CategoryEntity};
use crate::domain::{Category, NewCategory};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Category repository trait for dependency injection.
///
/// A missing row is reported as an absent result (`None` or `false`),
/// never as an error. Storage failures propagate as `AppError::Database`.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Insert a new category; storage assigns the id
    async fn create(&self, category: NewCategory) -> AppResult<Category>;

    /// Find category by ID
    async fn get(&self, id: i32) -> AppResult<Option<Category>>;

    /// List all categories, ordered by id
    async fn get_all(&self) -> AppResult<Vec<Category>>;

    /// Overwrite the name of the category with `category.id`.
    ///
    /// Returns `None` without writing anything when no such row exists.
    async fn update(&self, category: Category) -> AppResult<Option<Category>>;

    /// Remove category by ID, returning whether a row was removed
    async fn delete(&self, id: i32) -> AppResult<bool>;
}

/// Concrete implementation of CategoryRepository
pub struct CategoryStore {
    db: DatabaseConnection,
}

impl CategoryStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepository for CategoryStore {
    async fn create(&self, category: NewCategory) -> AppResult<Category> {
        let active_model = ActiveModel {
            name: Set(category.name),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        tracing::debug!(id = model.id, "Category created");
        Ok(Category::from(model))
    }

    async fn get(&self, id: i32) -> AppResult<Option<Category>> {
        let result = CategoryEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Category::from))
    }

    async fn get_all(&self) -> AppResult<Vec<Category>> {
        let models = CategoryEntity::find()
            .order_by_asc(category::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Category::from).collect())
    }

    async fn update(&self, category: Category) -> AppResult<Option<Category>> {
        let Some(existing) = CategoryEntity::find_by_id(category.id).one(&self.db).await? else {
            tracing::debug!(id = category.id, "Category not found, nothing updated");
            return Ok(None);
        };

        let mut active: ActiveModel = existing.into();
        active.name = Set(category.name);

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        tracing::debug!(id = model.id, "Category updated");
        Ok(Some(Category::from(model)))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = CategoryEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        tracing::debug!(id, rows_affected = result.rows_affected, "Category delete");
        Ok(result.rows_affected > 0)
    }
}
