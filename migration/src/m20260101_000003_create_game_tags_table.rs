use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000001_create_users_table::Users, m20260101_000002_create_games_table::Games,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GameTags::Table)
                    .if_not_exists()
                    .col(pk_uuid(GameTags::Id))
                    .col(uuid_null(GameTags::UserId))
                    .col(string(GameTags::Name))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_tags_user_id")
                            .from(GameTags::Table, GameTags::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // NULL owners are distinct to SQL, global tag names are deduplicated by the repository.
        manager
            .create_index(
                Index::create()
                    .name("idx_name_user")
                    .table(GameTags::Table)
                    .col(GameTags::Name)
                    .col(GameTags::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(GameRelatedTags::Table)
                    .if_not_exists()
                    .col(uuid(GameRelatedTags::GameId))
                    .col(uuid(GameRelatedTags::TagId))
                    .primary_key(
                        Index::create()
                            .col(GameRelatedTags::GameId)
                            .col(GameRelatedTags::TagId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_related_tags_game_id")
                            .from(GameRelatedTags::Table, GameRelatedTags::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_related_tags_tag_id")
                            .from(GameRelatedTags::Table, GameRelatedTags::TagId)
                            .to(GameTags::Table, GameTags::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GameRelatedTags::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(GameTags::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GameTags {
    Table,
    Id,
    UserId,
    Name,
}

#[derive(DeriveIden)]
pub enum GameRelatedTags {
    Table,
    GameId,
    TagId,
}
