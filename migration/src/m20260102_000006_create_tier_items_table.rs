use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000002_create_games_table::Games,
    m20260102_000005_create_tier_rows_table::TierRows,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TierItems::Table)
                    .if_not_exists()
                    .col(pk_uuid(TierItems::Id))
                    .col(uuid(TierItems::TierRowId))
                    .col(uuid(TierItems::GameId))
                    .col(integer(TierItems::SortOrder))
                    .col(integer(TierItems::Position).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tier_items_tier_row_id")
                            .from(TierItems::Table, TierItems::TierRowId)
                            .to(TierRows::Table, TierRows::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tier_items_game_id")
                            .from(TierItems::Table, TierItems::GameId)
                            .to(Games::Table, Games::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tier_items_tier_row_id")
                    .table(TierItems::Table)
                    .col(TierItems::TierRowId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tier_items_game_id")
                    .table(TierItems::Table)
                    .col(TierItems::GameId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TierItems::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TierItems {
    Table,
    Id,
    TierRowId,
    GameId,
    SortOrder,
    Position,
}
