//! Unit of Work - the persistence context handed to consumers.
//!
//! A unit of work is built by the composition root for one logical piece of
//! work (a CLI invocation, a request) and passed explicitly to services.
//! It is never stored in a global.
//!
//! Every repository write is committed as soon as it executes; the unit of
//! work does not batch writes across operations.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::repositories::{CategoryRepository, CategoryStore, InMemoryCategoryRepository};

/// Unit of Work trait for dependency injection.
///
/// Provides centralized access to all repositories.
pub trait UnitOfWork: Send + Sync {
    /// Get category repository
    fn categories(&self) -> Arc<dyn CategoryRepository>;
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    category_repo: Arc<dyn CategoryRepository>,
}

impl Persistence {
    /// Create a unit of work backed by the database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            category_repo: Arc::new(CategoryStore::new(db)),
        }
    }

    /// Create a unit of work backed by seeded in-memory storage
    pub fn in_memory() -> Self {
        Self::with_categories(Arc::new(InMemoryCategoryRepository::seeded()))
    }

    /// Create a unit of work over any category repository
    pub fn with_categories(category_repo: Arc<dyn CategoryRepository>) -> Self {
        Self { category_repo }
    }
}

impl UnitOfWork for Persistence {
    fn categories(&self) -> Arc<dyn CategoryRepository> {
        self.category_repo.clone()
    }
}
