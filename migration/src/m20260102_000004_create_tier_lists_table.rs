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
                    .table(TierLists::Table)
                    .if_not_exists()
                    .col(pk_uuid(TierLists::Id))
                    .col(uuid(TierLists::UserId))
                    .col(string(TierLists::Name))
                    .col(
                        timestamp_with_time_zone(TierLists::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(TierLists::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tier_lists_user_id")
                            .from(TierLists::Table, TierLists::UserId)
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
                    .name("idx_tier_lists_user_id")
                    .table(TierLists::Table)
                    .col(TierLists::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TierLists::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TierLists {
    Table,
    Id,
    UserId,
    Name,
    CreatedAt,
    UpdatedAt,
}
