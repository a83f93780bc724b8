//! Category repository integration tests.
//!
//! Each test runs against a fresh in-memory SQLite database with all
//! migrations applied, and the same scenarios run against the in-memory
//! repository so both implementations honor one contract.

use std::sync::Arc;

use yum_data::config::Config;
use yum_data::domain::{Category, NewCategory};
use yum_data::infra::{CategoryRepository, CategoryStore, Database, InMemoryCategoryRepository};

async fn sqlite_repo() -> Arc<dyn CategoryRepository> {
    let db = Database::connect(&Config::with_database_url("sqlite::memory:"))
        .await
        .expect("in-memory database");
    Arc::new(CategoryStore::new(db.get_connection()))
}

fn memory_repo() -> Arc<dyn CategoryRepository> {
    Arc::new(InMemoryCategoryRepository::seeded())
}

async fn repos() -> Vec<(&'static str, Arc<dyn CategoryRepository>)> {
    vec![("sqlite", sqlite_repo().await), ("memory", memory_repo())]
}

fn seeds() -> Vec<Category> {
    vec![
        Category::new(1, "Appetizer"),
        Category::new(2, "Entree"),
        Category::new(3, "Dessert"),
    ]
}

#[tokio::test]
async fn test_get_all_returns_seed_rows() {
    for (kind, repo) in repos().await {
        let all = repo.get_all().await.unwrap();
        assert_eq!(all, seeds(), "{kind}");
    }
}

#[tokio::test]
async fn test_create_then_get_returns_same_name() {
    for (kind, repo) in repos().await {
        let created = repo.create(NewCategory::new("Soup")).await.unwrap();
        let fetched = repo.get(created.id).await.unwrap().expect(kind);

        assert_eq!(fetched.name, "Soup", "{kind}");
        assert_eq!(fetched.id, created.id, "{kind}");
    }
}

#[tokio::test]
async fn test_create_assigns_id_above_seeds() {
    for (kind, repo) in repos().await {
        let created = repo.create(NewCategory::new("Soup")).await.unwrap();
        assert!(created.id > 3, "{kind}: got id {}", created.id);
    }
}

#[tokio::test]
async fn test_create_grows_list_by_one() {
    for (kind, repo) in repos().await {
        let before = repo.get_all().await.unwrap().len();
        let created = repo.create(NewCategory::new("Soup")).await.unwrap();
        let after = repo.get_all().await.unwrap();

        assert_eq!(after.len(), before + 1, "{kind}");
        assert!(after.contains(&created), "{kind}");
        assert_eq!(repo.get(created.id).await.unwrap().unwrap().name, "Soup");
    }
}

#[tokio::test]
async fn test_create_allows_duplicate_names() {
    for (kind, repo) in repos().await {
        let first = repo.create(NewCategory::new("Dessert")).await.unwrap();
        assert_ne!(first.id, 3, "{kind}");
        assert_eq!(repo.get_all().await.unwrap().len(), 4, "{kind}");
    }
}

#[tokio::test]
async fn test_get_missing_is_none() {
    for (kind, repo) in repos().await {
        assert!(repo.get(999).await.unwrap().is_none(), "{kind}");
    }
}

#[tokio::test]
async fn test_update_existing_changes_only_name() {
    for (kind, repo) in repos().await {
        let updated = repo
            .update(Category::new(2, "Main Course"))
            .await
            .unwrap()
            .expect(kind);

        assert_eq!(updated, Category::new(2, "Main Course"), "{kind}");
        assert_eq!(
            repo.get(2).await.unwrap(),
            Some(Category::new(2, "Main Course")),
            "{kind}"
        );
        // Neighbouring rows untouched
        assert_eq!(repo.get(1).await.unwrap(), Some(Category::new(1, "Appetizer")));
        assert_eq!(repo.get(3).await.unwrap(), Some(Category::new(3, "Dessert")));
    }
}

#[tokio::test]
async fn test_update_missing_writes_nothing() {
    for (kind, repo) in repos().await {
        let result = repo.update(Category::new(999, "Ghost")).await.unwrap();

        assert!(result.is_none(), "{kind}");
        assert!(repo.get(999).await.unwrap().is_none(), "{kind}");
        assert_eq!(repo.get_all().await.unwrap(), seeds(), "{kind}");
    }
}

#[tokio::test]
async fn test_delete_existing_then_missing() {
    for (kind, repo) in repos().await {
        assert!(repo.delete(1).await.unwrap(), "{kind}");
        assert!(!repo.delete(1).await.unwrap(), "{kind}");
        assert!(repo.get(1).await.unwrap().is_none(), "{kind}");
        assert_eq!(repo.get_all().await.unwrap().len(), 2, "{kind}");
    }
}

#[tokio::test]
async fn test_delete_never_existing_is_false() {
    for (kind, repo) in repos().await {
        assert!(!repo.delete(12345).await.unwrap(), "{kind}");
        assert_eq!(repo.get_all().await.unwrap(), seeds(), "{kind}");
    }
}

#[tokio::test]
async fn test_deleted_id_is_not_reused() {
    for (kind, repo) in repos().await {
        let soup = repo.create(NewCategory::new("Soup")).await.unwrap();
        assert!(repo.delete(soup.id).await.unwrap(), "{kind}");

        let salad = repo.create(NewCategory::new("Salad")).await.unwrap();
        assert!(salad.id > soup.id, "{kind}");
    }
}
