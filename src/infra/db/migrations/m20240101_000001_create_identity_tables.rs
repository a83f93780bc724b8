//! Migration: Create identity tables (users, roles, user-role links).
//!
//! Account management lives in the identity layer of the host application;
//! this crate only owns the schema so that one migrator builds the full database.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(IdentityUsers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(IdentityUsers::Id)
                            .string_len(450)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(IdentityUsers::UserName).string_len(256).null())
                    .col(
                        ColumnDef::new(IdentityUsers::NormalizedUserName)
                            .string_len(256)
                            .null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(IdentityUsers::Email).string_len(256).null())
                    .col(ColumnDef::new(IdentityUsers::NormalizedEmail).string_len(256).null())
                    .col(
                        ColumnDef::new(IdentityUsers::EmailConfirmed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(IdentityUsers::PasswordHash).text().null())
                    .col(ColumnDef::new(IdentityUsers::SecurityStamp).text().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(IdentityRoles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(IdentityRoles::Id)
                            .string_len(450)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(IdentityRoles::Name).string_len(256).null())
                    .col(
                        ColumnDef::new(IdentityRoles::NormalizedName)
                            .string_len(256)
                            .null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(IdentityUserRoles::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(IdentityUserRoles::UserId).string_len(450).not_null())
                    .col(ColumnDef::new(IdentityUserRoles::RoleId).string_len(450).not_null())
                    .primary_key(
                        Index::create()
                            .col(IdentityUserRoles::UserId)
                            .col(IdentityUserRoles::RoleId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_identity_user_roles_user")
                            .from(IdentityUserRoles::Table, IdentityUserRoles::UserId)
                            .to(IdentityUsers::Table, IdentityUsers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_identity_user_roles_role")
                            .from(IdentityUserRoles::Table, IdentityUserRoles::RoleId)
                            .to(IdentityRoles::Table, IdentityRoles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Link table first, it references both others
        manager
            .drop_table(Table::drop().table(IdentityUserRoles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(IdentityRoles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(IdentityUsers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum IdentityUsers {
    Table,
    Id,
    UserName,
    NormalizedUserName,
    Email,
    NormalizedEmail,
    EmailConfirmed,
    PasswordHash,
    SecurityStamp,
}

#[derive(Iden)]
enum IdentityRoles {
    Table,
    Id,
    Name,
    NormalizedName,
}

#[derive(Iden)]
enum IdentityUserRoles {
    Table,
    UserId,
    RoleId,
}
