//! Migration: Seed the default categories.
//!
//! Runs once as part of schema creation; the migrator records it and never
//! applies it again on later startups.

use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{ConnectionTrait, DbBackend};

use super::m20240101_000002_create_categories_table::Categories;
use crate::config::SEED_CATEGORIES;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert();
        insert
            .into_table(Categories::Table)
            .columns([Categories::Id, Categories::Name]);
        for (id, name) in SEED_CATEGORIES {
            insert.values_panic([(*id).into(), (*name).into()]);
        }
        manager.exec_stmt(insert.to_owned()).await?;

        // Explicit ids bypass the serial sequence on Postgres
        if manager.get_database_backend() == DbBackend::Postgres {
            manager
                .get_connection()
                .execute_unprepared(
                    "SELECT setval(pg_get_serial_sequence('categories', 'id'), \
                     (SELECT MAX(id) FROM categories))",
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let ids: Vec<i32> = SEED_CATEGORIES.iter().map(|(id, _)| *id).collect();

        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Categories::Table)
                    .and_where(Expr::col(Categories::Id).is_in(ids))
                    .to_owned(),
            )
            .await
    }
}
