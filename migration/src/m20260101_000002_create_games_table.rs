use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(pk_uuid(Games::Id))
                    .col(uuid(Games::UserId))
                    .col(string(Games::Title))
                    .col(string(Games::CoverUrl).default(""))
                    .col(string(Games::Genre).default(""))
                    .col(string_len(Games::Status, 20).default("backlog"))
                    .col(string_len(Games::Platform, 50).default(""))
                    .col(boolean(Games::Platinum).default(false))
                    .col(double_null(Games::Score))
                    .col(integer(Games::HoursPlayed).default(0))
                    .col(integer(Games::HltbEstimate).default(0))
                    .col(integer(Games::ReleaseYear).default(0))
                    .col(timestamp_with_time_zone_null(Games::DateFinished))
                    .col(timestamp_with_time_zone_null(Games::LastPlayedAt))
                    .col(text(Games::ReviewText).default(""))
                    .col(
                        timestamp_with_time_zone(Games::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Games::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_games_user_id")
                            .from(Games::Table, Games::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_games_user_id")
                    .table(Games::Table)
                    .col(Games::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Games::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Games {
    Table,
    Id,
    UserId,
    Title,
    CoverUrl,
    Genre,
    Status,
    Platform,
    Platinum,
    Score,
    HoursPlayed,
    HltbEstimate,
    ReleaseYear,
    DateFinished,
    LastPlayedAt,
    ReviewText,
    CreatedAt,
    UpdatedAt,
}
