pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_users_table;
mod m20260101_000002_create_games_table;
mod m20260101_000003_create_game_tags_table;
mod m20260102_000004_create_tier_lists_table;
mod m20260102_000005_create_tier_rows_table;
mod m20260102_000006_create_tier_items_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_users_table::Migration),
            Box::new(m20260101_000002_create_games_table::Migration),
            Box::new(m20260101_000003_create_game_tags_table::Migration),
            Box::new(m20260102_000004_create_tier_lists_table::Migration),
            Box::new(m20260102_000005_create_tier_rows_table::Migration),
            Box::new(m20260102_000006_create_tier_items_table::Migration),
        ]
    }
}
