//! In-memory category repository for testing and development.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use super::CategoryRepository;
use crate::config::SEED_CATEGORIES;
use crate::domain::{Category, NewCategory};
use crate::errors::AppResult;

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i32, String>,
    /// Last id handed out; ids are never reused after a delete
    last_id: i32,
}

/// In-memory implementation of CategoryRepository
#[derive(Debug, Clone, Default)]
pub struct InMemoryCategoryRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryCategoryRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding the default seed categories
    pub fn seeded() -> Self {
        let repo = Self::new();
        {
            let mut table = repo.table.write();
            for (id, name) in SEED_CATEGORIES {
                table.rows.insert(*id, (*name).to_string());
                table.last_id = table.last_id.max(*id);
            }
        }
        repo
    }

    /// Number of stored categories
    pub fn len(&self) -> usize {
        self.table.read().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn create(&self, category: NewCategory) -> AppResult<Category> {
        let mut table = self.table.write();
        table.last_id += 1;
        let id = table.last_id;
        table.rows.insert(id, category.name.clone());

        Ok(Category::new(id, category.name))
    }

    async fn get(&self, id: i32) -> AppResult<Option<Category>> {
        let table = self.table.read();
        Ok(table.rows.get(&id).map(|name| Category::new(id, name.clone())))
    }

    async fn get_all(&self) -> AppResult<Vec<Category>> {
        let table = self.table.read();
        Ok(table
            .rows
            .iter()
            .map(|(id, name)| Category::new(*id, name.clone()))
            .collect())
    }

    async fn update(&self, category: Category) -> AppResult<Option<Category>> {
        let mut table = self.table.write();
        match table.rows.get_mut(&category.id) {
            Some(name) => {
                name.clone_from(&category.name);
                Ok(Some(category))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        Ok(self.table.write().rows.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::block_on;

    #[test]
    fn seeded_holds_default_categories() {
        let repo = InMemoryCategoryRepository::seeded();
        let all = block_on(repo.get_all()).unwrap();

        assert_eq!(
            all,
            vec![
                Category::new(1, "Appetizer"),
                Category::new(2, "Entree"),
                Category::new(3, "Dessert"),
            ]
        );
    }

    #[test]
    fn create_assigns_next_id_after_seeds() {
        let repo = InMemoryCategoryRepository::seeded();
        let created = block_on(repo.create(NewCategory::new("Soup"))).unwrap();

        assert_eq!(created.id, 4);
        assert_eq!(repo.len(), 4);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let repo = InMemoryCategoryRepository::new();
        let first = block_on(repo.create(NewCategory::new("Soup"))).unwrap();
        assert!(block_on(repo.delete(first.id)).unwrap());

        let second = block_on(repo.create(NewCategory::new("Salad"))).unwrap();
        assert!(second.id > first.id);
        assert!(repo.len() == 1);
    }

    #[test]
    fn update_missing_leaves_rows_untouched() {
        let repo = InMemoryCategoryRepository::seeded();
        let result = block_on(repo.update(Category::new(99, "Ghost"))).unwrap();

        assert!(result.is_none());
        assert_eq!(repo.len(), 3);
        assert!(block_on(repo.get(99)).unwrap().is_none());
    }

    #[test]
    fn delete_twice_is_true_then_false() {
        let repo = InMemoryCategoryRepository::seeded();

        assert!(block_on(repo.delete(2)).unwrap());
        assert!(!block_on(repo.delete(2)).unwrap());
        assert!(block_on(repo.get(2)).unwrap().is_none());
    }
}
