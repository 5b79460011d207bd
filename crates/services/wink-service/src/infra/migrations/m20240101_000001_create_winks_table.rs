//! Migration: Create winks table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Winks::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Winks::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Winks::PostId).uuid().not_null())
                    .col(ColumnDef::new(Winks::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(Winks::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Lookup indexes only; (post_id, user_id) is not unique
        manager
            .create_index(
                Index::create()
                    .name("idx_winks_post_id")
                    .table(Winks::Table)
                    .col(Winks::PostId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_winks_user_id")
                    .table(Winks::Table)
                    .col(Winks::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Winks::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Winks {
    Table,
    Id,
    PostId,
    UserId,
    CreatedAt,
}
