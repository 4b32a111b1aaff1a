use sea_orm_migration::{prelude::*, schema::*};

use super::m20260102_000004_create_tier_lists_table::TierLists;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TierRows::Table)
                    .if_not_exists()
                    .col(pk_uuid(TierRows::Id))
                    .col(uuid(TierRows::TierListId))
                    .col(string(TierRows::Label))
                    .col(string_len(TierRows::Color, 7).default("#FFFFFF"))
                    .col(integer(TierRows::SortOrder))
                    .col(integer(TierRows::Position).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tier_rows_tier_list_id")
                            .from(TierRows::Table, TierRows::TierListId)
                            .to(TierLists::Table, TierLists::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tier_rows_tier_list_id")
                    .table(TierRows::Table)
                    .col(TierRows::TierListId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TierRows::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TierRows {
    Table,
    Id,
    TierListId,
    Label,
    Color,
    SortOrder,
    Position,
}
