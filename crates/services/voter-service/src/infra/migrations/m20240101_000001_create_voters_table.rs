//! Migration: Create voters table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Voters::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Voters::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Voters::Email).string().not_null())
                    .col(ColumnDef::new(Voters::Name).string().not_null())
                    .col(ColumnDef::new(Voters::PasswordHash).string().not_null())
                    .col(
                        ColumnDef::new(Voters::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Voters::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Email lookups back the duplicate checks; uniqueness stays in the service
        manager
            .create_index(
                Index::create()
                    .name("idx_voters_email")
                    .table(Voters::Table)
                    .col(Voters::Email)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Voters::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Voters {
    Table,
    Id,
    Email,
    Name,
    PasswordHash,
    CreatedAt,
    UpdatedAt,
}
